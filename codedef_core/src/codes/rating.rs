//! Load rating codes for existing bridges and the bridge seismic
//! performance evaluation guidelines.

design_codes! {
    /// Steel girder load rating code.
    pub enum SteelRatingCode in SteelRating {
        AashtoLrfr11 = 1 => "AASHTO-LRFR11";
        AashtoLrfr19 = 2 => "AASHTO-LRFR19";
        Cs454_20 = 3 => "CS454/20";
        NrGnCiv025_06 = 4 => "NR/GN/CIV/025:06";
        KsceAsd10 = 5 => "KSCE-ASD10";
        KsceLsd15 = 6 => "KSCE-LSD15";
        KsceRailAsd11 = 7 => "KSCE-RAIL-ASD11";
    }
}

design_codes! {
    /// Reinforced concrete load rating code.
    pub enum ConcreteRatingCode in ConcreteRating {
        KsceLsd15 = 1 => "KSCE-LSD15";
        KsceRailUsd11 = 2 => "KSCE-RAIL-USD11";
        KsceUsd10 = 3 => "KSCE-USD10";
    }
}

design_codes! {
    /// Prestressed concrete load rating code.
    pub enum PscRatingCode in PscRating {
        AashtoLrfd05 = 1 => "AASHTO-LRFD05";
        AashtoLrfr11 = 2 => "AASHTO-LRFR11";
        AashtoLrfr19 = 3 => "AASHTO-LRFR19";
        Cs454_20 = 4 => "CS454/20";
        KsceLsd15 = 5 => "KSCE-LSD15";
        KsceRailUsd11 = 6 => "KSCE-RAIL-USD11";
        KsceUsd05 = 7 => "KSCE-USD05";
        KsceUsd10 = 8 => "KSCE-USD10";
    }
}

design_codes! {
    /// Seismic performance evaluation guideline for existing bridges.
    pub enum BridgeSeismicCode in BridgeSeismicEvaluation {
        Kec2012 = 1 => "KEC2012";
        Kistec2015 = 2 => "KISTEC2015";
        Kistec2019 = 3 => "KISTEC2019";
        Kalis2023 = 4 => "KALIS2023";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_tables() {
        assert_eq!(SteelRatingCode::ALL.len(), 7);
        assert_eq!(ConcreteRatingCode::ALL.len(), 3);
        assert_eq!(PscRatingCode::ALL.len(), 8);
        assert_eq!(PscRatingCode::KsceUsd10.id(), 8);
        assert_eq!(SteelRatingCode::NrGnCiv025_06.full_name(), "NR/GN/CIV/025:06");
    }

    #[test]
    fn test_same_key_different_ids() {
        // KSCE-LSD15 appears in three rating families with unrelated ids
        assert_eq!(SteelRatingCode::KsceLsd15.id(), 6);
        assert_eq!(ConcreteRatingCode::KsceLsd15.id(), 1);
        assert_eq!(PscRatingCode::KsceLsd15.id(), 5);
    }

    #[test]
    fn test_bridge_seismic() {
        assert_eq!(BridgeSeismicCode::Kalis2023.id(), 4);
        assert_eq!(BridgeSeismicCode::Kalis2023.to_string(), "KALIS2023");
    }
}
