use std::rc::Rc;

use countview::LoadError;
use gloo::net::http::Request;
use yew::prelude::*;

/// Served next to `index.html`.
pub const WARNING_URL: &str = "warning.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub body: String,
}

/// Fetches the warning body. Only called once the counter first goes above
/// the threshold.
pub async fn load() -> Result<Warning, LoadError> {
    let response = Request::get(WARNING_URL)
        .send()
        .await
        .map_err(|err| LoadError::new(err.to_string()))?;
    if !response.ok() {
        return Err(LoadError::new(format!(
            "{} returned {} {}",
            WARNING_URL,
            response.status(),
            response.status_text()
        )));
    }
    let body = response
        .text()
        .await
        .map_err(|err| LoadError::new(err.to_string()))?;
    Ok(Warning { body })
}

#[derive(Properties, PartialEq)]
pub struct WarningPanelProps {
    pub warning: Rc<Warning>,
}

#[function_component]
pub fn WarningPanel(props: &WarningPanelProps) -> Html {
    html! {
        <div class="warning-panel">
            <h3>{"Warning"}</h3>
            <p>{props.warning.body.clone()}</p>
        </div>
    }
}
