//! Steel member design codes.

design_codes! {
    /// Hot-rolled and built-up steel member design code.
    ///
    /// Codes added after the table was first published are appended at the
    /// end, so `Gb55006_2021` sits after `AiscAsd22`.
    pub enum SteelCode in Steel {
        AiscAsd89 = 1 => "AISC-ASD89";
        AiscLrfd93 = 2 => "AISC-LRFD93";
        AisiCfsd86 = 3 => "AISI-CFSD86";
        Ec3 = 4 => "Eurocode3";
        Bs5950_90 = 5 => "BS5950-90";
        AikAsd83 = 6 => "AIK-ASD83";
        KsceAsd96 = 7 => "KSCE-ASD96";
        AikLsd97 = 8 => "AIK-LSD97";
        AikCfsd98 = 9 => "AIK-CFSD98";
        AijAsd02 = 10 => "AIJ-ASD02";
        Kepco97_1111 = 11 => "KEPCO97-1111";
        AiscLrfd2k = 12 => "AISC-LRFD2K";
        Jtj021_89 = 13 => "JTJ021-89";
        Cjj77_98 = 14 => "CJJ77-98";
        AashtoStd2k = 15 => "AASHTO-Std2K";
        Gbj17_88 = 16 => "GBJ17-88";
        AashtoLrfd02 = 17 => "AASHTO-LRFD02";
        CsaS16_01 = 18 => "CSA-S16-01";
        Jtj025_86 = 19 => "JTJ025-86";
        Is800_1984 = 20 => "IS:800-1984";
        Taiwan = 21 => "Taiwan";
        TwnBrgLsd90 = 22 => "TWN-BRG-LSD90";
        AashtoLfd96 = 23 => "AASHTO-LFD96";
        TwnAsd90 = 24 => "TWN-ASD90";
        TwnLsd90 = 25 => "TWN-LSD90";
        Gb50017_03 = 26 => "GB50017-03";
        TwnBrgAsd90 = 27 => "TWN-BRG-ASD90";
        AashtoAsd96 = 28 => "AASHTO-ASD96";
        KsscAsd03 = 29 => "KSSC-ASD03";
        Bs5950_2k = 30 => "BS5950-2K";
        KbcAsd05 = 31 => "KBC-ASD05";
        KsceAsd05 = 32 => "KSCE-ASD05";
        Ec3_05 = 33 => "Eurocode3:05";
        Ec0 = 34 => "Eurocode 0";
        Is800_2007 = 35 => "IS:800-2007";
        AashtoLrfd07 = 36 => "AASHTO-LRFD07";
        KsscLsd09 = 37 => "KSSC-LSD09";
        KbcLsd09 = 38 => "KBC-LSD09";
        AiscLrfd05 = 39 => "AISC(13th)-LRFD05";
        AiscAsd05 = 40 => "AISC(13th)-ASD05";
        TwnAsd96 = 41 => "TWN-ASD96";
        TwnLsd96 = 42 => "TWN-LSD96";
        KsceLsd15 = 43 => "KSCE-LSD15";
        KsceAsd10 = 44 => "KSCE-ASD10";
        KsceRailAsd04 = 45 => "KSCE-RAIL-ASD04";
        KsceRailAsd11 = 46 => "KSCE-RAIL-ASD11";
        AashtoLrfd12 = 47 => "AASHTO-LRFD12";
        CsaS6s1_10 = 48 => "CSA-S6S1-10";
        Ec3_2_05 = 49 => "Eurocode3-2:05";
        AiscLrfd10 = 50 => "AISC(14th)-LRFD10";
        AiscAsd10 = 51 => "AISC(14th)-ASD10";
        Snip2_05_03_84 = 52 => "SNiP 2.05.03-84*";
        Sp35_13330_2011 = 53 => "SP 35.13330.2011";
        Snip2_05_03_84Mks = 54 => "SNiP 2.05.03-84*(MKS)";
        Sp35_13330_2011Mks = 55 => "SP 35.13330.2011(MKS)";
        Gb50017_15 = 56 => "GB50017-15";
        AisiCfsd08 = 57 => "AISI-CFSD08";
        Pn85S10030 = 58 => "PN-85/S-10030";
        KsscLsd16 = 59 => "KSSC-LSD16";
        Kds41_31_2019 = 60 => "KDS 41 31 : 2019";
        KbcLsd16 = 61 => "KBC-LSD16";
        CsaS6_14 = 62 => "CSA-S6-14";
        Irc6Lsd = 63 => "IRC:6 LSD";
        Irc24_2010 = 64 => "IRC:24-2010";
        AashtoLrfd16 = 65 => "AASHTO-LRFD16";
        Gb50017_17 = 66 => "GB50017-17";
        AiscLrfd16 = 67 => "AISC(15th)-LRFD16";
        AiscAsd16 = 68 => "AISC(15th)-ASD16";
        JtgD60_15 = 69 => "JTG D60-15";
        AashtoLrfd17 = 70 => "AASHTO-LRFD17";
        Gb51249_2017 = 71 => "GB51249-2017";
        JroadH29 = 72 => "Japan Road II-H29";
        Nscp2015Lrfd = 73 => "NSCP 2015(LRFD)";
        Nscp2015Asd = 74 => "NSCP 2015(ASD)";
        Jgj209_2010 = 75 => "JGJ209-2010";
        Kds24_14_30_2019 = 76 => "KDS 24 14 30 : 2019";
        Kds41_30_10_2022 = 77 => "KDS 41 30 : 2022";
        Kds24_14_31_2018 = 78 => "KDS 24 14 31 : 2018";
        IrsSbc = 79 => "IRS SBC";
        AashtoLrfd20 = 80 => "AASHTO-LRFD20";
        JroadH24 = 81 => "Japan Road II-H24";
        JroadH14 = 82 => "Japan Road II-H14";
        CsaS6_19 = 83 => "CSA-S6-19";
        Sp16_13330_2017 = 84 => "SP 16.13330.2017";
        AiscLrfd22 = 85 => "AISC(16th)-LRFD22";
        AiscAsd22 = 86 => "AISC(16th)-ASD22";
        Gb55006_2021 = 87 => "GB55006-2021";
    }
}

design_codes! {
    /// Cold-formed steel design code.
    pub enum ColdFormedSteelCode in ColdFormedSteel {
        AikCfsd98 = 1 => "AIK-CFSD98";
        AisiCfsd86 = 2 => "AISI-CFSD86";
        Eurocode3_1_3_06 = 3 => "Eurocode3-1-3:06";
        AisiCfsd08 = 4 => "AISI-CFSD08";
        Gb50018_02 = 5 => "GB50018-02";
        Gb50018_25 = 6 => "GB/T50018-25";
    }
}

design_codes! {
    /// Composite steel girder (bridge) design code.
    pub enum CompositeGirderCode in CompositeSteelGirder {
        AashtoLrfd07 = 1 => "AASHTO-LRFD07";
        AashtoLrfd12 = 2 => "AASHTO-LRFD12";
        AashtoLrfd16 = 3 => "AASHTO-LRFD16";
        AashtoLrfd17 = 4 => "AASHTO-LRFD17";
        AashtoLrfd20 = 5 => "AASHTO-LRFD20";
        Cs457R1 = 6 => "CS457/R1";
        CsaS6_10 = 7 => "CSA-S6-10";
        CsaS6_14 = 8 => "CSA-S6-14";
        En1994_2 = 9 => "EN 1994-2";
        Irc22_2008 = 10 => "IRC:22-2008";
        Irc22_2015 = 11 => "IRC:22-2015";
        JtgD60_15 = 12 => "JTG D60-15";
        KsceAsd10 = 13 => "KSCE-ASD10";
        KsceLsd15 = 14 => "KSCE-LSD15";
        KsceRailAsd11 = 15 => "KSCE-RAIL-ASD11";
        Snip2_05_03_84 = 16 => "SNiP 2.05.03-84*";
        Sp35_13330_2011 = 17 => "SP 35.13330.2011";
        Kds24_14_31_2018 = 18 => "KDS 24 14 31 : 2018";
        As5100_2_17 = 19 => "AS 5100.2:17";
        As5100_6_2017 = 20 => "AS 5100.6:2017";
        CsaS6_19 = 21 => "CSA-S6-19";
    }
}

design_codes! {
    /// Steel orthotropic deck design code.
    pub enum OrthotropicDeckCode in SteelOrthotropicDeck {
        Snip2_05_03_84 = 1 => "SNiP 2.05.03-84*";
        Sp35_13330_2011 = 2 => "SP 35.13330.2011";
    }
}
