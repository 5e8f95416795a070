//! AssetAdministrationShell - The digital representation of one asset

use super::{File, View};
use crate::facet::{attribute_iri, DataSpecificationFacet, IdentifiableFacet, ReferableFacet};
use aas_types::{AssetKind, Reference};
use serde::{Deserialize, Serialize};

/// Meta information about the asset a shell represents
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInformation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    asset_kind: Option<AssetKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    global_asset_id: Option<Reference>,

    /// Submodels describing the asset's bill of material
    #[serde(default)]
    bill_of_materials: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_thumbnail: Option<File>,
}

model_element! {
    AssetInformation => AssetInformationBuilder,
    facets {},
    attributes [
        attribute_iri!("AssetInformation/assetKind"),
        attribute_iri!("AssetInformation/globalAssetId"),
        attribute_iri!("AssetInformation/billOfMaterial"),
        attribute_iri!("AssetInformation/defaultThumbnail"),
    ],
}

impl AssetInformation {
    pub fn asset_kind(&self) -> Option<AssetKind> {
        self.asset_kind
    }

    pub fn set_asset_kind(&mut self, asset_kind: Option<AssetKind>) {
        self.asset_kind = asset_kind;
    }

    pub fn global_asset_id(&self) -> Option<&Reference> {
        self.global_asset_id.as_ref()
    }

    pub fn set_global_asset_id(&mut self, global_asset_id: Option<Reference>) {
        self.global_asset_id = global_asset_id;
    }

    pub fn bill_of_materials(&self) -> &[Reference] {
        &self.bill_of_materials
    }

    pub fn bill_of_materials_mut(&mut self) -> &mut Vec<Reference> {
        &mut self.bill_of_materials
    }

    pub fn set_bill_of_materials(&mut self, bill_of_materials: Vec<Reference>) {
        self.bill_of_materials = bill_of_materials;
    }

    pub fn default_thumbnail(&self) -> Option<&File> {
        self.default_thumbnail.as_ref()
    }

    pub fn set_default_thumbnail(&mut self, default_thumbnail: Option<File>) {
        self.default_thumbnail = default_thumbnail;
    }
}

builder_setters!(AssetInformationBuilder {
    opt asset_kind: AssetKind => set_asset_kind;
    opt global_asset_id: Reference => set_global_asset_id;
    list bill_of_material, bill_of_materials: Reference => bill_of_materials_mut, set_bill_of_materials;
    opt default_thumbnail: File => set_default_thumbnail;
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAdministrationShell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    asset_information: Option<AssetInformation>,

    /// The shell this one was derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    derived_from: Option<Reference>,

    /// References to the submodels of the shell; the submodels are not owned
    #[serde(default)]
    submodels: Vec<Reference>,

    #[serde(default)]
    views: Vec<View>,

    #[serde(flatten)]
    referable: ReferableFacet,
    #[serde(flatten)]
    identifiable: IdentifiableFacet,
    #[serde(flatten)]
    data_specification: DataSpecificationFacet,
}

model_element! {
    AssetAdministrationShell => AssetAdministrationShellBuilder,
    facets {
        referable: ReferableFacet,
        identifiable: IdentifiableFacet,
        data_specification: DataSpecificationFacet,
    },
    attributes [
        attribute_iri!("AssetAdministrationShell/assetInformation"),
        attribute_iri!("AssetAdministrationShell/derivedFrom"),
        attribute_iri!("AssetAdministrationShell/submodel"),
        attribute_iri!("AssetAdministrationShell/view"),
    ],
}

impl AssetAdministrationShell {
    pub fn asset_information(&self) -> Option<&AssetInformation> {
        self.asset_information.as_ref()
    }

    pub fn set_asset_information(&mut self, asset_information: Option<AssetInformation>) {
        self.asset_information = asset_information;
    }

    pub fn derived_from(&self) -> Option<&Reference> {
        self.derived_from.as_ref()
    }

    pub fn set_derived_from(&mut self, derived_from: Option<Reference>) {
        self.derived_from = derived_from;
    }

    pub fn submodels(&self) -> &[Reference] {
        &self.submodels
    }

    pub fn submodels_mut(&mut self) -> &mut Vec<Reference> {
        &mut self.submodels
    }

    pub fn set_submodels(&mut self, submodels: Vec<Reference>) {
        self.submodels = submodels;
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn views_mut(&mut self) -> &mut Vec<View> {
        &mut self.views
    }

    pub fn set_views(&mut self, views: Vec<View>) {
        self.views = views;
    }
}

builder_setters!(AssetAdministrationShellBuilder {
    opt asset_information: AssetInformation => set_asset_information;
    opt derived_from: Reference => set_derived_from;
    list submodel, submodels: Reference => submodels_mut, set_submodels;
    list view, views: View => views_mut, set_views;
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use aas_types::{Identifier, Key, KeyElements, KeyType};

    #[test]
    fn test_shell_references_submodels_without_owning_them() {
        let submodel_ref = Reference::from_key(Key::new(
            KeyElements::Submodel,
            "urn:example:sm:nameplate",
            KeyType::Iri,
        ));

        let shell = AssetAdministrationShell::builder()
            .identification(Identifier::iri("urn:example:aas:pump-7"))
            .id_short("Pump7")
            .asset_information(
                AssetInformation::builder()
                    .asset_kind(AssetKind::Instance)
                    .default_thumbnail(File::builder().value("thumb.png").build())
                    .build(),
            )
            .submodel(submodel_ref.clone())
            .view(View::builder().id_short("maintenance").contained_element(submodel_ref.clone()).build())
            .build();

        assert_eq!(shell.submodels(), &[submodel_ref]);
        assert_eq!(shell.views().len(), 1);
        assert_eq!(
            shell.asset_information().and_then(|i| i.asset_kind()),
            Some(AssetKind::Instance)
        );
        assert!(shell.derived_from().is_none());
    }

    #[test]
    fn test_asset_information_defaults() {
        let info = AssetInformation::new();
        assert!(info.asset_kind().is_none());
        assert!(info.global_asset_id().is_none());
        assert!(info.bill_of_materials().is_empty());
        assert!(info.default_thumbnail().is_none());
    }
}
