//! # Material Codes
//!
//! Standards that define material grades (yield strength, elastic modulus,
//! rebar sizes). The suffix in each name marks the material: `(S)` steel,
//! `(RC)` concrete, `(A)` aluminum, `(T)` timber.

design_codes! {
    /// Steel material standard.
    pub enum SteelMaterialCode in SteelMaterial {
        Ks = 1 => "KS(S)";
        Ks08 = 2 => "KS08(S)";
        Ks09 = 3 => "KS09(S)";
        Ks08Civil = 4 => "KS08-Civil(S)";
        KsCivil = 5 => "KS-Civil(S)";
        Astm = 6 => "ASTM(S)";
        Astm09 = 7 => "ASTM09(S)";
        Jis = 8 => "JIS(S)";
        JisCivil = 9 => "JIS-Civil(S)";
        Bs = 10 => "BS(S)";
        Din = 11 => "DIN(S)";
        En = 12 => "EN(S)";
        Uni = 13 => "UNI(S)";
        Gb03 = 14 => "GB03(S)";
        Gb = 15 => "GB(S)";
        Jgj = 16 => "JGJ(S)";
        Jtj = 17 => "JTJ(S)";
        Jtg04 = 18 => "JTG04(S)";
        Csa = 19 => "CSA(S)";
        Is = 20 => "IS(S)";
        Cns = 21 => "CNS(S)";
        Cns06 = 22 => "CNS06(S)";
        Bs04 = 23 => "BS04(S)";
        En05 = 24 => "EN05(S)";
        Tb05 = 25 => "TB05(S)";
        GostSp = 26 => "GOST-SP(S)";
        KsceLsd15 = 27 => "KSCE-LSD15(S)";
        Ks10Civil = 28 => "KS10-Civil(S)";
        En05Ps = 29 => "EN05-PS(S)";
        En05Sw = 30 => "EN05-SW(S)";
        Gb12 = 31 => "GB12(S)";
        GostSnip = 32 => "GOST-SNIP(S)";
        Bc1_12Astm = 33 => "BC1:12-ASTM(S)";
        Bc1_12Bsen = 34 => "BC1:12-BS EN(S)";
        Bc1_12Jis = 35 => "BC1:12-JIS(S)";
        Bc1_12Gb = 36 => "BC1:12-GB(S)";
        Bc1_12Class2 = 37 => "BC1:12-Class2(S)";
        Bc1_12Class3 = 38 => "BC1:12-Class3(S)";
        Jtg3362_18 = 39 => "JTG3362-18(S)";
        En10326 = 40 => "EN10326(S)";
        En10149_2 = 41 => "EN10149-2(S)";
        En10149_3 = 42 => "EN10149-3(S)";
        Ks16 = 43 => "KS16(S)";
        JtgD64_2015 = 44 => "JTG D64-2015(S)";
        Gb50917_13 = 45 => "GB 50917-13(S)";
        Gb50018_02 = 46 => "GB50018-02(S)";
        Gb50018_25 = 47 => "GB/T50018-25(S)";
        Jgj2015 = 48 => "JGJ2015(S)";
        Ks18 = 49 => "KS18(S)";
        Gb50017_17 = 50 => "GB50017-17(S)";
        Tb10092_17 = 51 => "TB10092-17(S)";
        Tb10091_17 = 52 => "TB10091-17(S)";
        AsNzs3678 = 53 => "AS/NZS 3678(S)";
        AsNzs3679_1 = 54 => "AS/NZS 3679.1(S)";
        AsNzs4672_1 = 55 => "AS/NZS 4672.1(S)";
        Gb19 = 56 => "GB19(S)";
        QCr9300_18 = 57 => "Q/CR 9300-18(S)";
        Cjj11_2019 = 58 => "CJJ11-2019(S)";
        Ks22 = 59 => "KS22(S)";
        Jtj023_85 = 60 => "JTJ023-85(S)";
        Tis1228_2018 = 61 => "TIS 1228-2018(S)";
        Sp16_2017Tb3 = 62 => "SP16.2017t.B3(S)";
        Sp16_2017Tb4 = 63 => "SP16.2017t.B4(S)";
        Sp16_2017Tb5 = 64 => "SP16.2017t.B5(S)";
        NrGnCiv025 = 65 => "NR/GN/CIV/025(S)";
        AstmA416 = 66 => "ASTM A416";
        GbT5224 = 67 => "GB/T 5224";
        Etc = 68 => "ETC";
        KsD7002 = 69 => "KS D 7002";
        En10138_3 = 70 => "EN 10138-3";
    }
}

design_codes! {
    /// Concrete and rebar material standard.
    pub enum ConcreteMaterialCode in ConcreteMaterial {
        As17 = 1 => "AS17(RC)";
        Astm = 2 => "ASTM(RC)";
        Astm19 = 3 => "ASTM19(RC)";
        Astm19Cvl = 4 => "ASTM19-Civil(RC)";
        Bs = 5 => "BS(RC)";
        Cjj11_2019 = 6 => "CJJ11-2019(RC)";
        Cns = 7 => "CNS(RC)";
        Cns560 = 8 => "CNS560(RC)";
        Cns560_18 = 9 => "CNS560-18(RC)";
        Csa = 10 => "CSA(RC)";
        En = 11 => "EN(RC)";
        En04 = 12 => "EN04(RC)";
        Gb = 13 => "GB(RC)";
        GbCivil = 14 => "GB-Civil(RC)";
        Gb10 = 15 => "GB/T10(RC)";
        Gb19 = 16 => "GB19(RC)";
        Gb50917_13 = 17 => "GB 50917-13(RC)";
        GostSnip = 18 => "GOST-SNIP(RC)";
        GostSp = 19 => "GOST-SP(RC)";
        Irc = 20 => "IRC(RC)";
        Irs = 21 => "IRS(RC)";
        Is = 22 => "IS(RC)";
        Jis = 23 => "JIS(RC)";
        JisCivil = 24 => "JIS-Civil(RC)";
        Jtj023_85 = 25 => "JTJ023-85(RC)";
        Jtg04 = 26 => "JTG04(RC)";
        Jtg3362_18 = 27 => "JTG3362-18(RC)";
        Ks = 28 => "KS(RC)";
        KsCivil = 29 => "KS-Civil(RC)";
        Ks01 = 30 => "KS01(RC)";
        Ks01Civil = 31 => "KS01-Civil(RC)";
        Ks19 = 32 => "KS19(RC)";
        KsceLsd15 = 33 => "KSCE-LSD15(RC)";
        Ntc08 = 34 => "NTC08(RC)";
        Ntc12 = 35 => "NTC12(RC)";
        Ntc18 = 36 => "NTC18(RC)";
        Pns49 = 37 => "PNS49(RC)";
        QCr9300_18 = 38 => "Q/CR 9300-18(RC)";
        Sni = 39 => "SNI(RC)";
        Ss = 40 => "SS(RC)";
        Tb05 = 41 => "TB05(RC)";
        Tb10092_17 = 42 => "TB10092-17(RC)";
        Tis = 43 => "TIS(RC)";
        TisMks = 44 => "TIS(MKS)(RC)";
        Uni = 45 => "UNI(RC)";
        UscSi = 46 => "U.S.C(SI)(RC)";
        UscUs = 47 => "U.S.C(US)(RC)";
        NmxNtc2017 = 48 => "NMX NTC-2017(RC)";
        Tmh7 = 49 => "TMH7(RC)";
        Ts = 50 => "TS(RC)";
        Sp63_2018 = 51 => "SP63.2018(RC)";
        NmxNtc2023 = 52 => "NMX2023(RC)";
        NmxNtc2023Mks = 53 => "NMX2023(MKS)(RC)";
        RebarUser = 54 => "USER";
    }
}

design_codes! {
    /// Aluminum material standard.
    pub enum AluminumMaterialCode in AluminumMaterial {
        Aa = 1 => "AA(A)";
        Gb50429_07 = 2 => "GB50429-07(A)";
        Ec2023 = 3 => "EC2023(A)";
    }
}

design_codes! {
    /// Timber material standard.
    pub enum TimberMaterialCode in TimberMaterial {
        En338 = 1 => "EN 338(T)";
        En14080 = 2 => "EN 14080(T)";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steel_material() {
        assert_eq!(SteelMaterialCode::Ks.full_name(), "KS(S)");
        assert_eq!(SteelMaterialCode::En10138_3.id(), 70);
        assert_eq!(SteelMaterialCode::ALL.len(), 70);
    }

    #[test]
    fn test_concrete_material() {
        assert_eq!(ConcreteMaterialCode::ALL.len(), 54);
        assert_eq!(ConcreteMaterialCode::RebarUser.short_name(), "USER");
        assert_eq!(ConcreteMaterialCode::Sp63_2018.id(), 51);
    }

    #[test]
    fn test_small_material_tables() {
        assert_eq!(AluminumMaterialCode::ALL.len(), 3);
        assert_eq!(TimberMaterialCode::En14080.full_name(), "EN 14080(T)");
        assert!(TimberMaterialCode::from_id(3).is_none());
    }
}
