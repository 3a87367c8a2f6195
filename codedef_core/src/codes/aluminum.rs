//! Aluminum member design codes.

design_codes! {
    /// Aluminum member design code.
    pub enum AluminumCode in Aluminum {
        AaAsd05 = 1 => "AA-ASD05";
        AaAsd10 = 2 => "AA-ASD10";
        AaLrfd05 = 3 => "AA-LRFD05";
        AaLrfd10 = 4 => "AA-LRFD10";
        Gb50429_2007 = 5 => "GB50429-2007";
    }
}
