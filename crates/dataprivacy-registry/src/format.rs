// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turns declared metadata into display-ready items.

use dataprivacy_core::traits::Localizer;
use dataprivacy_core::{MetadataDeclaration, MetadataField, MetadataItem, PrivacyError};

/// Resolve one declaration for `owning_component`.
///
/// Field descriptions and the summary are translated in the owning
/// component's scope. A missing translation fails the item.
pub fn format_item(
    item: &MetadataDeclaration,
    owning_component: &str,
    localizer: &dyn Localizer,
) -> Result<MetadataItem, PrivacyError> {
    let fields = item
        .fields
        .iter()
        .map(|field| {
            Ok(MetadataField {
                field_name: field.name.clone(),
                field_description: localizer.translate(
                    &field.description_key,
                    owning_component,
                    &[],
                )?,
            })
        })
        .collect::<Result<Vec<_>, PrivacyError>>()?;

    Ok(MetadataItem {
        name: item.name.clone(),
        kind: item.kind.to_string(),
        fields,
        summary: localizer.translate(&item.summary_key, owning_component, &[])?,
        is_link: item.kind.is_link(),
    })
}

/// Format a whole collection, preserving declaration order.
pub fn format_collection(
    collection: &[MetadataDeclaration],
    owning_component: &str,
    localizer: &dyn Localizer,
) -> Result<Vec<MetadataItem>, PrivacyError> {
    collection
        .iter()
        .map(|item| format_item(item, owning_component, localizer))
        .collect()
}
