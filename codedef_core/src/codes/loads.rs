//! Load-generation codes: wind, seismic, load combination and the
//! structural reliability standard.

design_codes! {
    /// Wind load code used for automatic lateral load generation.
    pub enum WindLoadCode in WindLoad {
        Ansi1982 = 1 => "ANSI(1982)", "ANSI1982";
        Bs6399_1997 = 2 => "BS6399(1997)", "BS6399(97)";
        Ch2002 = 3 => "China(GB50009-2001)", "CH2001";
        Ch2012 = 4 => "China(GB50009-2012)", "CH2012";
        Ch2021 = 5 => "China(GB55001-2021)", "CH2021";
        Dpt2007 = 6 => "DPT.1311-50:2007";
        Euro1992 = 7 => "Eurocode-1(1992)", "EURO1992";
        Euro2005 = 8 => "Eurocode-1(2005)", "EURO2005";
        Ibc2000 = 9 => "IBC2000(ASCE7-98)", "IBC2000";
        Ibc2009 = 10 => "IBC2009(ASCE7-05)", "IBC2009";
        Ibc2012 = 11 => "IBC2012(ASCE7-10)", "IBC2012";
        Is875_1987 = 12 => "IS875(1987)", "IS875(87)";
        Is875_2015 = 13 => "IS875(2015)";
        Jp2004 = 14 => "Japan(2004)", "JP2004";
        Jp1987 = 15 => "Japan(1987)", "JP1987";
        Jpn2000 = 16 => "Japan(Arch.2000)", "JP2000";
        Kbc2009 = 17 => "KBC(2009)";
        Kbc2016 = 18 => "KBC(2016)";
        Kds2019 = 19 => "KDS(41-10-15:2019)";
        Kds2022 = 20 => "KDS(41-12:2022)";
        Ks2000 = 21 => "Korea(Arch.2000)", "KS2000";
        Ks1992 = 22 => "Korea(Arch.1992)", "KS1992";
        Nbc1995 = 23 => "NBC(1995)", "NBC1995";
        Nsr2010 = 24 => "NSR-10";
        Taiwan2002 = 25 => "Taiwan(2002)", "TWN2002";
        Ubc1997 = 26 => "UBC(1997)", "UBC1997";
        Asce7_2016 = 27 => "ASCE7(2016)";
        Asce7_2022 = 28 => "ASCE7(2022)";
        Nscp2024 = 29 => "NSCP 2024";
        Rus2016User = 30 => "SP 20.113330.2016(User Type)", "RUS2016";
    }
}

design_codes! {
    /// Seismic load code used for response spectrum and static seismic loads.
    pub enum SeismicLoadCode in SeismicLoad {
        Atc306 = 1 => "ATC3-06", "ATC306";
        Ch2001 = 2 => "China(GB50011-2001)", "CH2001";
        Ch2010 = 3 => "China(GB/T50011-2010)", "CH2010";
        Chsh2003 = 4 => "China Shanghai(DGJ08-9-2003)", "CHSH2003";
        Dpt2018 = 5 => "DPT.1301/1302-61:2018";
        Euro1996 = 6 => "Eurocode-8(1996)", "EURO1996";
        Euro2004 = 7 => "Eurocode-8(2004)", "EURO2004";
        Ibc2000 = 8 => "IBC2000(ASCE7-98)", "IBC2000";
        Ibc2009 = 9 => "IBC2009(ASCE7-05)", "IBC2009";
        Ibc2012 = 10 => "IBC2012(ASCE7-10)", "IBC2012";
        Is1893_2002 = 11 => "IS1893(2002)", "IS2002";
        Is1893_2016 = 12 => "IS1893(2016)", "IS1893-2016";
        Jis2000 = 13 => "Japan(Arch.2000)", "JP2000";
        Kbc2005 = 14 => "KBC2005";
        Kbc2009 = 15 => "KBC(2009)", "KBC2009";
        Kbc2016 = 16 => "KBC(2016)", "KBC2016";
        Kds2019 = 17 => "KDS(41-17-00:2019)";
        Kds2018 = 18 => "KDS(17-10-00:2018)";
        Ks1992 = 19 => "Korea(Arch.1992)", "KS1992";
        Ks2000 = 20 => "Korea(Arch.2000)", "KS2000";
        Nbc1995 = 21 => "NBC(1995)", "NBC1995";
        Nsr2010 = 22 => "NSR-10";
        Ntc2008 = 23 => "NTC2008";
        Ntc2012 = 24 => "NTC2012";
        Ntc2018 = 25 => "NTC2018";
        P100_2013 = 26 => "P100-1(2013)";
        Taiwan1999 = 27 => "Taiwan(1999)", "TWN1999";
        Taiwan2006 = 28 => "Taiwan(2006)", "TWN2006";
        Taiwan2011 = 29 => "Taiwan(2011)", "TWN2011";
        Taiwan2022 = 30 => "Taiwan(2022)", "TWN2022";
        Ubc1991 = 31 => "UBC(1991)", "UBC1991";
        Ubc1997 = 32 => "UBC(1997)", "UBC1997";
        UserType = 33 => "User Type", "USER TYPE";
        Nscp2024 = 34 => "NSCP 2024";
        Sans2010 = 35 => "SANS-10160-4(2010)", "SANS (2010)";
    }
}

design_codes! {
    /// Code governing automatic load combination generation.
    pub enum LoadCombinationCode in LoadCombination {
        NtcCde2017 = 1 => "NTC-CDE(2017)";
        Sp20_13330_2016 = 2 => "SP 20.13330.2016";
        Thailand2021 = 3 => "Thailand(2021)";
    }
}

design_codes! {
    /// Structural reliability (unified design) standard.
    pub enum ReliabilityCode in ReliabilityStandard {
        Gb50068_2018 = 1 => "GB50068-2018";
    }
}
