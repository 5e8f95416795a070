//! Kind markers: template vs. instance

literal_enum! {
    /// Whether an element is a template or an instance of one
    pub enum ModelingKind {
        /// Specification of common features of structurally identical instances
        Template => "Template",
        /// Concrete, clearly identifiable component of a template
        Instance => "Instance",
    }
}

literal_enum! {
    /// Whether an asset is a type asset or an instance asset
    pub enum AssetKind {
        Type => "Type",
        Instance => "Instance",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    #[test]
    fn test_modeling_kind_round_trip() {
        for kind in ModelingKind::ALL {
            assert_eq!(kind.as_str().parse::<ModelingKind>(), Ok(*kind));
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = "template".parse::<ModelingKind>().unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownVariant {
                kind: "ModelingKind",
                value: "template".to_string(),
            }
        );
    }

    #[test]
    fn test_asset_kind_serde_literal() {
        let json = serde_json::to_string(&AssetKind::Type).unwrap();
        assert_eq!(json, "\"Type\"");
    }
}
