//! Shell-side UI state for the reservation and success routes.

use poly_ticker_core::{FieldError, FormField, TickerFormValues, TICKER_SUCCESS_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Reserve,
    Success,
}

impl Route {
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            TICKER_SUCCESS_PATH => Some(Route::Success),
            "/ticker" => Some(Route::Reserve),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageUiState {
    pub route: Route,
    /// Editable copy of the form store, pushed back on change.
    pub draft: TickerFormValues,
    pub field_errors: Vec<FieldError>,
    pub last_error: Option<String>,
    pub last_info: Option<String>,
    pub last_title: Option<String>,
}

impl PageUiState {
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_info = None;
        self.last_error = Some(message.into());
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.last_error = None;
        self.last_info = Some(message.into());
    }

    pub fn clear_notice(&mut self) {
        self.last_error = None;
        self.last_info = None;
    }

    pub fn field_error(&self, field: FormField) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Validate the draft before asking the controller to open confirmation.
    pub fn validate_draft(&mut self) -> bool {
        match self.draft.validate() {
            Ok(_) => {
                self.field_errors.clear();
                true
            }
            Err(errors) => {
                self.field_errors = errors;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PageUiState, Route};
    use poly_ticker_core::FormField;

    #[test]
    fn success_path_maps_to_success_route() {
        assert_eq!(Route::from_path("/ticker/success"), Some(Route::Success));
        assert_eq!(Route::from_path("/nowhere"), None);
        assert_eq!(Route::default(), Route::Reserve);
    }

    #[test]
    fn setting_error_clears_info_and_vice_versa() {
        let mut state = PageUiState::default();
        state.set_info("ok");
        assert_eq!(state.last_info.as_deref(), Some("ok"));
        state.set_error("bad");
        assert_eq!(state.last_error.as_deref(), Some("bad"));
        assert!(state.last_info.is_none());
    }

    #[test]
    fn invalid_draft_records_field_errors() {
        let mut state = PageUiState::default();
        assert!(!state.validate_draft());
        assert_eq!(state.field_error(FormField::Ticker), Some("Required."));

        state.draft.ticker = "POLY".to_owned();
        state.draft.token_name = "Polymath".to_owned();
        state.draft.owner = "0x1000000000000000000000000000000000000001".to_owned();
        assert!(state.validate_draft());
        assert!(state.field_errors.is_empty());
    }
}
