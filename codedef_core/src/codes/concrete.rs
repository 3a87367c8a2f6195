//! Reinforced concrete and steel-reinforced concrete (SRC) design codes.

design_codes! {
    /// Reinforced concrete member design code.
    pub enum ConcreteCode in Concrete {
        Aci318_89 = 1 => "ACI318-89";
        Aci318_95 = 2 => "ACI318-95";
        Aci318_99 = 3 => "ACI318-99";
        AikUsd94 = 4 => "AIK-USD94";
        KsceUsd96 = 5 => "KSCE-USD96";
        KciUsd99 = 6 => "KCI-USD99";
        AikWsd2k = 7 => "AIK-WSD2K";
        AijWsd99 = 8 => "AIJ-WSD99";
        Bs8110_97 = 9 => "BS8110-97";
        Ec2 = 10 => "Eurocode2";
        Gb50010_02 = 11 => "GB50010-02";
        KrtaBrg2k = 12 => "KRTA-BRG2K";
        Jtj021_89 = 13 => "JTJ021-89";
        Cjj77_98 = 14 => "CJJ77-98";
        AashtoStd2k = 15 => "AASHTO-Std2K";
        Jtj023_85 = 16 => "JTJ023-85";
        AashtoLrfd02 = 17 => "AASHTO-LRFD02";
        Aci318_02 = 18 => "ACI318-02";
        CsaA23_3_94 = 19 => "CSA-A23.3-94";
        CsaS6_00 = 20 => "CSA-S6-00";
        Irc21_2000 = 21 => "IRC:21-2000";
        Is456_2000 = 22 => "IS456:2000";
        Irc6_2000 = 23 => "IRC:6-2000";
        Taiwan = 24 => "Taiwan";
        TwnBrgLsd90 = 25 => "TWN-BRG-LSD90";
        AashtoLfd96 = 26 => "AASHTO-LFD96";
        TwnUsd92 = 27 => "TWN-USD92";
        JroadH14 = 28 => "Japan Road III-H14";
        JroadH29 = 29 => "Japan Road III-H29";
        KsceUsd03 = 30 => "KSCE-USD03";
        JtgD60_04 = 31 => "JTG D60-04";
        JtgD62_04 = 32 => "JTG D62-04";
        KsceUsd05 = 33 => "KSCE-USD05";
        KsceRailUsd04 = 34 => "KSCE-RAIL-USD04";
        KbcUsd05 = 35 => "KBC-USD05";
        KciUsd03 = 36 => "KCI-USD03";
        Tb10002_3_05 = 37 => "TB 10002.3-05";
        Tb10002_1_05 = 38 => "TB 10002.1-05";
        Ec2_04 = 39 => "Eurocode2:04";
        Aci318_05 = 40 => "ACI318-05";
        KciUsd07 = 41 => "KCI-USD07";
        KbcUsd09 = 42 => "KBC-USD09";
        AashtoLrfd07 = 43 => "AASHTO-LRFD07";
        JtgB02_01_2008 = 44 => "JTG/B02-01-2008";
        Ec2_2_05 = 45 => "Eurocode2-2:05";
        Ec0 = 46 => "Eurocode 0";
        Bs5400_90 = 47 => "BS 5400-4:1990";
        KsceLsd15 = 48 => "KSCE-LSD15";
        KciUsd12 = 49 => "KCI-USD12";
        TwnUsd100 = 50 => "TWN-USD100";
        TwnUsd112 = 51 => "TWN-USD112";
        Gb50010_10 = 52 => "GB/T50010-10";
        Gb50010_19 = 53 => "GB50010-19";
        KsceUsd10 = 54 => "KSCE-USD10";
        KsceRailUsd11 = 55 => "KSCE-RAIL-USD11";
        Cjj11_2011 = 56 => "CJJ11-2011";
        Cjj11_2019 = 57 => "CJJ11-2019";
        Aci318_08 = 58 => "ACI318-08";
        Aci318_11 = 59 => "ACI318-11";
        AashtoLrfd12 = 60 => "AASHTO-LRFD12";
        Cjj166_2011 = 61 => "CJJ166-2011";
        CsaS6s1_10 = 62 => "CSA-S6S1-10";
        Snip2_05_03_84 = 63 => "SNiP 2.05.03-84*";
        Sp35_13330_2011 = 64 => "SP 35.13330.2011";
        Snip2_05_03_84Mks = 65 => "SNiP 2.05.03-84*(MKS)";
        Sp35_13330_2011Mks = 66 => "SP 35.13330.2011(MKS)";
        Irc6Lsd = 67 => "IRC:6 LSD";
        Irc112_2011 = 68 => "IRC:112-2011";
        Nsr10 = 69 => "NSR-10";
        AashtoLrfd14 = 70 => "AASHTO-LRFD14";
        JtgD60_15 = 71 => "JTG D60-15";
        EscGb19 = 72 => "Engineering Structure Common Code (GB2019)", "ESC-GB2019";
        Pn85S10030 = 73 => "PN-85/S-10030";
        Kds41_20_2022 = 74 => "KDS 41 20 : 2022";
        Kds41_30_2018 = 75 => "KDS 41 30 : 2018";
        KbcUsd16 = 76 => "KBC-USD16";
        CsaS6_14 = 77 => "CSA-S6-14";
        Aci318_14 = 78 => "ACI318-14";
        Aci318m14 = 79 => "ACI318M-14";
        AashtoLrfd16 = 80 => "AASHTO-LRFD16";
        Gb50069_2002 = 81 => "GB50069-2002";
        As5100_5_17 = 82 => "AS 5100.5:17";
        Tb10002_2017 = 83 => "TB 10002-2017";
        As5100_2_17 = 84 => "AS 5100.2:17";
        Irs = 85 => "IRS";
        AashtoLrfd17 = 86 => "AASHTO-LRFD17";
        Bs5400 = 87 => "BS 5400";
        Jtgt2231_01_2020 = 88 => "JTG/T 2231-01-2020";
        Nscp2015 = 89 => "NSCP 2015";
        Aci318_19 = 90 => "ACI318-19";
        Aci318m19 = 91 => "ACI318M-19";
        Kds24_14_21_2022 = 92 => "KDS 24 14 21 : 2021";
        Irc112_2020 = 93 => "IRC:112-2020";
        NtcDcec2017 = 94 => "NTC-DCEC(2017)";
        AashtoLrfd20 = 95 => "AASHTO-LRFD20";
        CsaS6_19 = 96 => "CSA-S6-19";
        Sp63_13330_2018 = 97 => "SP 63.13330.2018";
        NtcDcec2023 = 98 => "NTC-DCEC(2023)";
        Arema2023 = 99 => "AREMA-2023";
        Aci318_25 = 100 => "ACI318-25";
        Aci318m25 = 101 => "ACI318M-25";
        Tmh07_89 = 102 => "TMH07-3:1989";
        JroadH14H24 = 103 => "Japan Road III-H14/H24";
        Tmh07_1981 = 104 => "TMH07-1981";
    }
}

design_codes! {
    /// Steel-reinforced concrete (encased/filled composite) design code.
    pub enum SrcCode in SteelReinforcedConcrete {
        Ssrc79 = 1 => "SSRC79";
        AikSrc2k = 2 => "AIK-SRC2K";
        AijSrc01 = 3 => "AIJ-SRC01";
        Jgj138_01 = 4 => "JGJ138-01";
        TwnSrc92 = 5 => "TWN-SRC92";
        KbcSrc05 = 6 => "KBC-SRC05";
        TwnSrc100 = 7 => "TWN-SRC100";
        KbcSrc09 = 8 => "KBC-SRC09";
        KbcSrc16 = 9 => "KBC-SRC16";
        Kds41Src2019 = 10 => "KDS 41 SRC : 2019";
        Gb50068_2019 = 11 => "GB50068-2019";
        Kds41Src2022 = 12 => "KDS 41 SRC : 2022";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_anchor_ids() {
        assert_eq!(ConcreteCode::Aci318_89.id(), 1);
        assert_eq!(ConcreteCode::Aci318m25.id(), 101);
        assert_eq!(ConcreteCode::Tmh07_89.id(), 102);
        assert_eq!(ConcreteCode::JroadH14H24.id(), 103);
        assert_eq!(ConcreteCode::Tmh07_1981.id(), 104);
        assert_eq!(ConcreteCode::ALL.len(), 104);
    }

    #[test]
    fn test_concrete_names() {
        assert_eq!(ConcreteCode::EscGb19.full_name(), "Engineering Structure Common Code (GB2019)");
        assert_eq!(ConcreteCode::EscGb19.short_name(), "ESC-GB2019");
        assert_eq!(ConcreteCode::JroadH14H24.short_name(), "Japan Road III-H14/H24");
    }

    #[test]
    fn test_src_sequence() {
        let ids: Vec<u16> = SrcCode::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<u16>>());
        assert_eq!(SrcCode::Ssrc79.short_name(), "SSRC79");
        assert_eq!(SrcCode::Kds41Src2022.full_name(), "KDS 41 SRC : 2022");
        assert_eq!(SrcCode::try_from(13).ok(), None);
    }
}
