use contracts::domain::brand::aggregate::Brand;
use contracts::domain::category::aggregate::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::banner::BannerSection;
use super::carousel::CarouselSection;
use super::countdown::CountdownSection;
use crate::domain::brand::api as brand_api;
use crate::domain::category::api as category_api;
use crate::shared::page_frame::{PageFrame, PAGE_KIND_LIST};
use crate::system::auth::context::{use_session, Session};
use crate::system::auth::policy::{use_api_errors, ApiErrors};

/// Lookups the promotion forms link to
#[derive(Clone, Copy)]
pub struct PromotionsContext {
    pub brands: RwSignal<Vec<Brand>>,
    pub categories: RwSignal<Vec<Category>>,
}

impl PromotionsContext {
    fn new() -> Self {
        Self {
            brands: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
        }
    }

    pub fn load_lookups(&self, session: Session, errors: ApiErrors) {
        let brands = self.brands;
        let categories = self.categories;

        let client = session.client();
        spawn_local(async move {
            match brand_api::fetch_brands(&client).await {
                Ok(list) => brands.set(list),
                Err(e) => errors.report(e),
            }
        });

        let client = session.client();
        spawn_local(async move {
            match category_api::fetch_categories(&client).await {
                Ok(list) => categories.set(list),
                Err(e) => errors.report(e),
            }
        });
    }
}

#[component]
pub fn PromotionsPage() -> impl IntoView {
    let session = use_session();
    let errors = use_api_errors();
    let ctx = PromotionsContext::new();
    ctx.load_lookups(session, errors);

    view! {
        <PageFrame
            page_id="promotion--list"
            kind=PAGE_KIND_LIST
            title="Promotions"
            subtitle="What the storefront shows on its home page"
        >
            <CarouselSection ctx=ctx />
            <BannerSection ctx=ctx />
            <CountdownSection ctx=ctx />
        </PageFrame>
    }
}
