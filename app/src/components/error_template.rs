//! Error page shown for unmatched routes.
//!
//! On the server it also sets the HTTP status of the response from the first
//! [`AppError`] it renders.

use http::status::StatusCode;
use leptos::prelude::*;
use leptos_router::components::A;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Pulls the [`AppError`]s out of a Leptos error bag, dropping anything else.
pub fn app_errors(errors: &Errors) -> Vec<AppError> {
    errors
        .clone()
        .into_iter()
        .filter_map(|(_key, err)| err.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Router fallback: renders a single [`AppError::NotFound`].
pub fn not_found() -> impl IntoView {
    let mut errors = Errors::default();
    errors.insert_with_default_key(AppError::NotFound);
    component(errors)
}

pub fn component(errors: Errors) -> impl IntoView {
    let errors = app_errors(&errors);

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    let heading = if errors.len() > 1 { "Errors" } else { "Error" };

    view! {
        <section class="grid place-content-center px-4 min-h-screen text-center text-white">
            <h1 class="mb-6 text-3xl font-bold">{heading}</h1>
            {errors
                .into_iter()
                .map(|error| {
                    let code = error.status_code();
                    view! {
                        <p class="text-xl tracking-widest text-gray-400 uppercase">
                            {format!("{} | {error}", code.as_u16())}
                        </p>
                    }
                })
                .collect_view()}
            <div class="mt-6 text-gray-300 transition-colors duration-300 hover:text-white">
                <A href="/">"Back to home"</A>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "Not Found");
    }

    #[test]
    fn app_errors_keeps_app_errors() {
        let mut errors = Errors::default();
        errors.insert_with_default_key(AppError::NotFound);
        assert_eq!(app_errors(&errors), vec![AppError::NotFound]);
    }

    #[test]
    fn app_errors_drops_foreign_errors() {
        #[derive(Debug, Error)]
        #[error("other")]
        struct Other;

        let mut errors = Errors::default();
        errors.insert_with_default_key(Other);
        assert!(app_errors(&errors).is_empty());
    }
}
