use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing, Form, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use fusion_core_contact_contracts::{ContactFeatureService, ContactSendError};
use fusion_core_pages_contracts::{IndexPage, PagesFeatureService};
use fusion_models::contact::{ContactForm, FieldErrors};
use fusion_templates_contracts::{IndexTemplate, Notice, TemplateService};

use super::internal_server_error;

/// One-shot cookie carrying the success notice across the post-submit
/// redirect. Consumed (and deleted) by the next GET.
const FLASH_COOKIE: &str = "fusion_flash";

const SUCCESS_NOTICE: &str = "Email enviado com sucesso!";
const ERROR_NOTICE: &str = "Erro ao tentar enviar o email!";

pub struct IndexState<Pages, Contact, Templates> {
    pub pages: Pages,
    pub contact: Contact,
    pub templates: Templates,
}

pub fn router<Pages, Contact, Templates>(
    state: Arc<IndexState<Pages, Contact, Templates>>,
) -> Router<()>
where
    Pages: PagesFeatureService,
    Contact: ContactFeatureService,
    Templates: TemplateService,
{
    Router::new()
        .route("/", routing::get(index).post(submit))
        .with_state(state)
}

async fn index<Pages, Contact, Templates>(
    State(state): State<Arc<IndexState<Pages, Contact, Templates>>>,
    jar: CookieJar,
) -> Response
where
    Pages: PagesFeatureService,
    Contact: ContactFeatureService,
    Templates: TemplateService,
{
    let (jar, notice) = match jar.get(FLASH_COOKIE) {
        Some(_) => (
            jar.remove(Cookie::from(FLASH_COOKIE)),
            Some(Notice::success(SUCCESS_NOTICE)),
        ),
        None => (jar, None),
    };

    match render_index(&state, notice, Default::default(), Default::default()).await {
        Ok(html) => (jar, Html(html)).into_response(),
        Err(err) => internal_server_error(err),
    }
}

async fn submit<Pages, Contact, Templates>(
    State(state): State<Arc<IndexState<Pages, Contact, Templates>>>,
    jar: CookieJar,
    Form(form): Form<ContactForm>,
) -> Response
where
    Pages: PagesFeatureService,
    Contact: ContactFeatureService,
    Templates: TemplateService,
{
    let submission = match form.clone().validate() {
        Ok(submission) => submission,
        Err(errors) => {
            let notice = Some(Notice::error(ERROR_NOTICE));
            return match render_index(&state, notice, form, errors).await {
                Ok(html) => Html(html).into_response(),
                Err(err) => internal_server_error(err),
            };
        }
    };

    match state.contact.send_submission(submission).await {
        Ok(()) => {
            let jar = jar.add(Cookie::build((FLASH_COOKIE, "1")).path("/").http_only(true));
            (StatusCode::FOUND, jar, [(header::LOCATION, "/")]).into_response()
        }
        Err(ContactSendError::Send) => {
            let notice = Some(Notice::error(ERROR_NOTICE));
            match render_index(&state, notice, form, Default::default()).await {
                Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
                Err(err) => internal_server_error(err),
            }
        }
        Err(ContactSendError::Other(err)) => internal_server_error(err),
    }
}

async fn render_index<Pages, Contact, Templates>(
    state: &IndexState<Pages, Contact, Templates>,
    notice: Option<Notice>,
    form: ContactForm,
    errors: FieldErrors,
) -> anyhow::Result<String>
where
    Pages: PagesFeatureService,
    Templates: TemplateService,
{
    let IndexPage { services, team } = state.pages.get_index().await?;
    state.templates.render(&IndexTemplate {
        notice,
        form,
        errors,
        services,
        team,
    })
}
