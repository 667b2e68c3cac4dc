use contracts::domain::brand::aggregate::Brand;
use contracts::domain::category::aggregate::Category;
use contracts::domain::promotion::aggregate::{Association, AssociationKind};
use leptos::prelude::*;

use super::page::PromotionsContext;
use crate::shared::components::form_field::SelectField;

/// Human label of the brand or category a promotion points at
pub fn target_name(association: &Association, brands: &[Brand], categories: &[Category]) -> String {
    let found = match association.kind {
        AssociationKind::Brand => brands
            .iter()
            .find(|b| b.brand_id == association.target_id)
            .map(|b| b.brand_name.clone()),
        AssociationKind::Category => categories
            .iter()
            .find(|c| c.category_id == association.target_id)
            .map(|c| c.category_name.clone()),
    };
    match found {
        Some(name) => format!("{}: {}", association.kind, name),
        None if association.target_id.is_empty() => association.kind.to_string(),
        None => format!("{}: {}", association.kind, association.target_id),
    }
}

/// Kind select plus a target select filled from the loaded brands or categories
#[component]
pub fn AssociationPicker(value: RwSignal<Association>, ctx: PromotionsContext) -> impl IntoView {
    let kinds = AssociationKind::all()
        .into_iter()
        .map(|k| (k.code().to_string(), k.display_name().to_string()))
        .collect::<Vec<_>>();

    let targets = Signal::derive(move || match value.with(|a| a.kind) {
        AssociationKind::Brand => ctx.brands.with(|list| {
            list.iter()
                .map(|b| (b.brand_id.clone(), b.brand_name.clone()))
                .collect::<Vec<_>>()
        }),
        AssociationKind::Category => ctx.categories.with(|list| {
            list.iter()
                .map(|c| (c.category_id.clone(), c.category_name.clone()))
                .collect::<Vec<_>>()
        }),
    });

    let on_kind = Callback::new(move |code: String| {
        let Some(kind) = AssociationKind::from_code(&code) else {
            return;
        };
        value.update(|a| {
            if a.kind != kind {
                a.kind = kind;
                a.target_id.clear();
            }
        });
    });

    view! {
        <div class="form__row">
            <SelectField
                label="Links to"
                required=true
                value=Signal::derive(move || value.with(|a| a.kind.code().to_string()))
                on_change=on_kind
                options=kinds
            />
            <SelectField
                label="Target"
                required=true
                placeholder="Select..."
                value=Signal::derive(move || value.with(|a| a.target_id.clone()))
                on_change=Callback::new(move |id| value.update(|a| a.target_id = id))
                options=targets
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(id: &str, name: &str) -> Brand {
        Brand {
            brand_id: id.into(),
            brand_name: name.into(),
            brand_logo: String::new(),
            total_products: 0,
        }
    }

    #[test]
    fn test_target_name_resolves_brand() {
        let association = Association {
            kind: AssociationKind::Brand,
            target_id: "b2".into(),
        };
        let brands = vec![brand("b1", "Nike"), brand("b2", "Puma")];
        assert_eq!(target_name(&association, &brands, &[]), "Brand: Puma");
    }

    #[test]
    fn test_target_name_falls_back_to_id() {
        let association = Association {
            kind: AssociationKind::Category,
            target_id: "c9".into(),
        };
        assert_eq!(target_name(&association, &[], &[]), "Category: c9");
        assert_eq!(target_name(&Association::default(), &[], &[]), "Brand");
    }
}
