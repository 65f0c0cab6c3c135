//! Selector callbacks
//!
//! Each callback binds a named page input to a named output region. A change
//! on the input is dispatched to the bound handler, whose result replaces the
//! output region's content.

use serde_json::Value;
use tracing::debug;

use crate::error::AppError;
use crate::types::CallbackResponse;

pub const COUNTRY_DROPDOWN: &str = "country-dropdown";
pub const COUNTRY_OUTPUT: &str = "country-output";
pub const YEAR_DROPDOWN: &str = "year-dropdown";
pub const YEAR_OUTPUT: &str = "year-output";

/// Turns a selector value into display content
pub type Handler = fn(&Value) -> Result<String, AppError>;

#[derive(Clone, Copy)]
pub struct Callback {
    pub input: &'static str,
    pub output: &'static str,
    handler: Handler,
}

/// Input-to-output bindings for the page
#[derive(Clone, Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the country and year selectors bound
    pub fn dashboard() -> Self {
        let mut registry = Self::new();
        registry.register(COUNTRY_DROPDOWN, COUNTRY_OUTPUT, country_handler);
        registry.register(YEAR_DROPDOWN, YEAR_OUTPUT, year_handler);
        registry
    }

    /// Bind `input` to `output`. A later binding for the same input replaces
    /// the earlier one.
    pub fn register(&mut self, input: &'static str, output: &'static str, handler: Handler) {
        self.callbacks.retain(|c| c.input != input);
        self.callbacks.push(Callback {
            input,
            output,
            handler,
        });
    }

    pub fn callbacks(&self) -> &[Callback] {
        &self.callbacks
    }

    /// Run the handler bound to `input` against `value`
    pub fn dispatch(&self, input: &str, value: &Value) -> Result<CallbackResponse, AppError> {
        let callback = self
            .callbacks
            .iter()
            .find(|c| c.input == input)
            .ok_or_else(|| AppError::NotFound(format!("No callback bound to input '{input}'")))?;

        let content = (callback.handler)(value)?;
        debug!(input, output = callback.output, %value, "Dispatched callback");

        Ok(CallbackResponse {
            output: callback.output,
            content,
        })
    }
}

fn country_handler(value: &Value) -> Result<String, AppError> {
    let country = match value {
        Value::Null => None,
        Value::String(s) => Some(s.as_str()),
        _ => return Err(AppError::BadRequest("country must be a string".into())),
    };
    Ok(worldcup_finals::country_message(country)?)
}

fn year_handler(value: &Value) -> Result<String, AppError> {
    let year = match value {
        Value::Null => None,
        Value::Number(n) => Some(
            n.as_u64()
                .and_then(|y| u16::try_from(y).ok())
                .ok_or_else(|| AppError::BadRequest(format!("invalid year: {n}")))?,
        ),
        _ => return Err(AppError::BadRequest("year must be a number".into())),
    };
    Ok(worldcup_finals::year_message(year)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use worldcup_finals::{COUNTRY_PROMPT, YEAR_PROMPT};

    #[test]
    fn test_dashboard_bindings() {
        let registry = CallbackRegistry::dashboard();
        let bindings: Vec<_> = registry
            .callbacks()
            .iter()
            .map(|c| (c.input, c.output))
            .collect();
        assert_eq!(
            bindings,
            vec![
                (COUNTRY_DROPDOWN, COUNTRY_OUTPUT),
                (YEAR_DROPDOWN, YEAR_OUTPUT)
            ]
        );
    }

    #[test]
    fn test_dispatch_country() {
        let registry = CallbackRegistry::dashboard();
        let response = registry.dispatch(COUNTRY_DROPDOWN, &json!("Italy")).unwrap();
        assert_eq!(response.output, COUNTRY_OUTPUT);
        assert_eq!(response.content, "Italy has won the FIFA World Cup 4 times.");
    }

    #[test]
    fn test_dispatch_year() {
        let registry = CallbackRegistry::dashboard();
        let response = registry.dispatch(YEAR_DROPDOWN, &json!(1970)).unwrap();
        assert_eq!(response.output, YEAR_OUTPUT);
        assert_eq!(
            response.content,
            "In 1970, the winner was Brazil and the runner-up was Italy."
        );
    }

    #[test]
    fn test_dispatch_cleared_selection_gives_prompt() {
        let registry = CallbackRegistry::dashboard();
        assert_eq!(
            registry.dispatch(COUNTRY_DROPDOWN, &Value::Null).unwrap().content,
            COUNTRY_PROMPT
        );
        assert_eq!(
            registry.dispatch(YEAR_DROPDOWN, &Value::Null).unwrap().content,
            YEAR_PROMPT
        );
    }

    #[test]
    fn test_dispatch_unknown_input() {
        let registry = CallbackRegistry::dashboard();
        let err = registry.dispatch("team-dropdown", &json!("x")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_dispatch_wrong_value_type() {
        let registry = CallbackRegistry::dashboard();
        assert!(matches!(
            registry.dispatch(YEAR_DROPDOWN, &json!("1970")).unwrap_err(),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            registry.dispatch(YEAR_DROPDOWN, &json!(-4)).unwrap_err(),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            registry.dispatch(COUNTRY_DROPDOWN, &json!(5)).unwrap_err(),
            AppError::BadRequest(_)
        ));
    }

    #[test]
    fn test_dispatch_value_outside_data_is_internal() {
        let registry = CallbackRegistry::dashboard();
        assert!(matches!(
            registry.dispatch(YEAR_DROPDOWN, &json!(1942)).unwrap_err(),
            AppError::Internal(_)
        ));
        assert!(matches!(
            registry
                .dispatch(COUNTRY_DROPDOWN, &json!("Netherlands"))
                .unwrap_err(),
            AppError::Internal(_)
        ));
    }

    #[test]
    fn test_register_replaces_existing_binding() {
        fn echo(value: &Value) -> Result<String, AppError> {
            Ok(value.to_string())
        }

        let mut registry = CallbackRegistry::dashboard();
        registry.register(YEAR_DROPDOWN, "debug-output", echo);

        assert_eq!(registry.callbacks().len(), 2);
        let response = registry.dispatch(YEAR_DROPDOWN, &json!(1970)).unwrap();
        assert_eq!(response.output, "debug-output");
        assert_eq!(response.content, "1970");
    }
}
