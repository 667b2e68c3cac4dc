//! Sidebar navigation, grouped the same way the dashboard areas are.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::paths;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (href, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Overview",
            icon: "home",
            items: vec![(paths::HOME, "Dashboard", "home")],
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "package",
            items: vec![
                (paths::PRODUCTS, "Products", "package"),
                (paths::CATEGORIES, "Categories", "folder"),
                (paths::SUBCATEGORIES, "Subcategories", "layers"),
                (paths::BRANDS, "Brands", "tag"),
            ],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "shopping-cart",
            items: vec![
                (paths::ORDERS, "Orders", "shopping-cart"),
                (paths::INVENTORY, "Inventory", "inventory"),
                (paths::PROMOTIONS, "Promotions", "megaphone"),
            ],
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "users",
            items: vec![(paths::USERS, "Users", "users")],
        },
    ]
}

/// The dashboard home is highlighted only on its own path; every other
/// item also covers its add/edit/detail sub-pages.
fn is_active_item(pathname: &str, href: &str) -> bool {
    let pathname = pathname.trim_end_matches('/');
    if href == paths::HOME {
        return pathname == href;
    }
    pathname == href || pathname.starts_with(&format!("{href}/"))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let collapsed_groups: RwSignal<Vec<&'static str>> = RwSignal::new(vec![]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let gid = group.id;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item app-sidebar__group"
                            on:click=move |_| collapsed_groups.update(|items| {
                                if let Some(pos) = items.iter().position(|x| *x == gid) {
                                    items.remove(pos);
                                } else {
                                    items.push(gid);
                                }
                            })
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || !collapsed_groups.get().contains(&gid)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=move || !collapsed_groups.get().contains(&gid)>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&(href, label, icon_name)| view! {
                                    <A href=href attr:class="app-sidebar__link">
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || is_active_item(&location.pathname.get(), href)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    </A>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_only_exact() {
        assert!(is_active_item("/dashboard", paths::HOME));
        assert!(is_active_item("/dashboard/", paths::HOME));
        assert!(!is_active_item("/dashboard/orders", paths::HOME));
    }

    #[test]
    fn test_sub_pages_highlight_parent() {
        assert!(is_active_item("/dashboard/orders/665f", paths::ORDERS));
        assert!(is_active_item("/dashboard/brand/edit", paths::BRANDS));
        assert!(!is_active_item("/dashboard/brandnew", paths::BRANDS));
    }
}
