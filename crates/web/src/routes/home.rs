//! Marketing home page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::content::{self, BusinessInfo, Card, Product, Stat, Step, Testimonial};
use crate::error::AppError;
use crate::routes::api::inquiry::InquiryForm;
use crate::state::AppState;

const SUBMITTED: &str = "상담 신청이 완료되었습니다. 빠른 시일 내에 연락드리겠습니다.";

/// Outcome banner shown above the submit button after a plain form post.
#[derive(Debug, Clone, Copy)]
pub struct FormResult {
    pub success: bool,
    pub message: &'static str,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub tagline: &'static str,
    pub dealer_kinds: &'static str,
    pub stats: &'static [Stat],
    pub pain_points: &'static [Card],
    pub verification_steps: &'static [Card],
    pub reasons: &'static [Card],
    pub steps: &'static [Step],
    pub testimonials: &'static [Testimonial],
    pub products: &'static [Product],
    pub business: &'static BusinessInfo,
    pub copyright: &'static str,
    pub proposal_url: Option<String>,
    pub kakao_channel_url: Option<String>,
    pub form_result: Option<FormResult>,
}

/// Display the home page.
///
/// GET /
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    page(&state, None)
}

/// Contact form fallback for browsers without JavaScript.
///
/// POST /
pub async fn submit(State(state): State<AppState>, Form(form): Form<InquiryForm>) -> Response {
    let outcome = state
        .inquiries()
        .submit(
            form.name.as_deref(),
            form.phone.as_deref(),
            form.message.as_deref(),
        )
        .await;

    match outcome {
        Ok(_) => page(
            &state,
            Some(FormResult {
                success: true,
                message: SUBMITTED,
            }),
        )
        .into_response(),
        Err(e) => {
            let err = AppError::from(e);
            let status = if matches!(err, AppError::Validation(_)) {
                StatusCode::BAD_REQUEST
            } else {
                let event_id = sentry::capture_error(&err);
                tracing::error!(
                    error = %err,
                    sentry_event_id = %event_id,
                    "Contact form submission failed"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            };
            let result = FormResult {
                success: false,
                message: err.user_message(),
            };
            (status, page(&state, Some(result))).into_response()
        }
    }
}

fn page(state: &AppState, form_result: Option<FormResult>) -> HomeTemplate {
    let site = &state.config().site;

    HomeTemplate {
        title: content::PAGE_TITLE,
        description: content::PAGE_DESCRIPTION,
        keywords: content::PAGE_KEYWORDS,
        tagline: content::TAGLINE,
        dealer_kinds: content::DEALER_KINDS,
        stats: content::STATS,
        pain_points: content::PAIN_POINTS,
        verification_steps: content::VERIFICATION_STEPS,
        reasons: content::REASONS,
        steps: content::STEPS,
        testimonials: content::TESTIMONIALS,
        products: content::PRODUCTS,
        business: &content::BUSINESS,
        copyright: content::COPYRIGHT,
        proposal_url: site.proposal_url.clone(),
        kakao_channel_url: site.kakao_channel_url.clone(),
        form_result,
    }
}
