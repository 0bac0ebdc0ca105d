use gloo_net::http::Request;
use log::{debug, info, warn};
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct PageContext {
    pub sol_price: f64,
}

#[derive(Debug, Error)]
pub enum PriceError {
    #[error("price fetching is disabled")]
    Disabled,
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("price endpoint answered {0}")]
    Status(u16),
    #[error("response had no solana/usd quote")]
    MissingQuote,
}

#[derive(Deserialize)]
struct Quote {
    usd: f64,
}

#[derive(Deserialize)]
struct PriceResponse {
    solana: Option<Quote>,
}

pub async fn fetch_sol_price() -> Result<f64, PriceError> {
    if !config::PRICE_FETCH_ENABLED {
        return Err(PriceError::Disabled);
    }
    let response = Request::get(config::SOL_PRICE_API).send().await?;
    if !response.ok() {
        return Err(PriceError::Status(response.status()));
    }
    let body: PriceResponse = response.json().await?;
    body.solana.map(|q| q.usd).ok_or(PriceError::MissingQuote)
}

#[hook]
pub fn use_page() -> PageContext {
    use_context::<PageContext>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct PageProviderProps {
    pub children: Children,
}

#[function_component(PageProvider)]
pub fn page_provider(props: &PageProviderProps) -> Html {
    let context = use_state(PageContext::default);

    {
        let context = context.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match fetch_sol_price().await {
                        Ok(sol_price) => {
                            info!("SOL price: {}", sol_price);
                            context.set(PageContext { sol_price });
                        }
                        Err(PriceError::Disabled) => debug!("price fetch disabled, keeping 0"),
                        Err(err) => warn!("price fetch failed: {}", err),
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<PageContext> context={(*context).clone()}>
            <main class="page-shell">{ props.children.clone() }</main>
        </ContextProvider<PageContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_response_decodes() {
        let body: PriceResponse = serde_json::from_str(r#"{"solana":{"usd":142.5}}"#).unwrap();
        assert_eq!(body.solana.map(|q| q.usd), Some(142.5));

        let empty: PriceResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.solana.is_none());
    }

    #[test]
    fn default_context_has_zero_price() {
        assert_eq!(PageContext::default().sol_price, 0.0);
    }
}
