#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

use alloy::primitives::{hex, Address};
use alloy::sol_types::SolCall;
use serde_json::{json, Value};
use tiny_http::{Response, Server, StatusCode};

use poly_ticker_adapters::contracts::{IPolyToken, ITickerRegistry};
use poly_ticker_adapters::TickerAdapterConfig;

pub const EXPIRY_LIMIT_SECS: u64 = 14 * 86_400;
pub const BALANCE_BASE_UNITS: u128 = 1_000 * 1_000_000_000_000_000_000;
pub const REGISTER_HASH: &str =
    "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
pub const APPROVE_HASH: &str =
    "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

pub fn node_account() -> Address {
    "0x1000000000000000000000000000000000000001"
        .parse()
        .expect("valid node account")
}

pub fn registry_address() -> Address {
    "0x00000000000000000000000000000000000000AA"
        .parse()
        .expect("valid registry address")
}

pub fn poly_token_address() -> Address {
    "0x00000000000000000000000000000000000000BB"
        .parse()
        .expect("valid token address")
}

pub fn rpc_config(base_url: String) -> TickerAdapterConfig {
    TickerAdapterConfig {
        rpc_url: Some(base_url),
        rpc_timeout_ms: 5_000,
        ticker_registry_address: registry_address(),
        poly_token_address: poly_token_address(),
        ..TickerAdapterConfig::default()
    }
}

/// Everything the mock node saw, as `(method, params)`.
pub type CallLog = Arc<Mutex<Vec<(String, Value)>>>;

fn word(value: u128) -> String {
    format!("0x{value:064x}")
}

fn selector_of(params: &Value) -> String {
    params[0]["data"]
        .as_str()
        .unwrap_or_default()
        .chars()
        .take(10)
        .collect()
}

pub fn spawn_mock_node(calls: CallLog, max_requests: usize) -> String {
    let server = Server::http("127.0.0.1:0").expect("start server");
    let addr = format!("http://{}", server.server_addr());

    let expiry_selector = format!("0x{}", hex::encode(ITickerRegistry::expiryLimitCall::SELECTOR));
    let balance_selector = format!("0x{}", hex::encode(IPolyToken::balanceOfCall::SELECTOR));
    let approve_selector = format!("0x{}", hex::encode(IPolyToken::approveCall::SELECTOR));

    thread::spawn(move || {
        for _ in 0..max_requests {
            let mut req = match server.recv() {
                Ok(r) => r,
                Err(_) => break,
            };
            let mut body = String::new();
            let _ = req.as_reader().read_to_string(&mut body);
            let payload: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
            let method = payload["method"].as_str().unwrap_or_default().to_owned();
            let params = payload["params"].clone();
            if let Ok(mut g) = calls.lock() {
                g.push((method.clone(), params.clone()));
            }

            let result = match method.as_str() {
                "eth_accounts" => json!([node_account()]),
                "eth_chainId" => json!("0x2a"),
                "eth_call" if selector_of(&params) == expiry_selector => {
                    json!(word(EXPIRY_LIMIT_SECS as u128))
                }
                "eth_call" if selector_of(&params) == balance_selector => {
                    json!(word(BALANCE_BASE_UNITS))
                }
                "eth_sendTransaction" if selector_of(&params) == approve_selector => {
                    json!(APPROVE_HASH)
                }
                "eth_sendTransaction" => json!(REGISTER_HASH),
                "eth_getTransactionReceipt" => json!({ "status": "0x1" }),
                _ => {
                    let response = Response::from_string(
                        json!({"jsonrpc": "2.0", "id": 1, "error": {"code": -32601, "message": "method not found"}})
                            .to_string(),
                    )
                    .with_status_code(StatusCode(200));
                    let _ = req.respond(response);
                    continue;
                }
            };

            let response = Response::from_string(
                json!({"jsonrpc": "2.0", "id": 1, "result": result}).to_string(),
            )
            .with_status_code(StatusCode(200));
            let _ = req.respond(response);
        }
    });

    addr
}
