use std::collections::BTreeMap;

use urlenc::{decode, encode};

fn main() {
    let mut params = BTreeMap::new();
    params.insert("q", "rust & percent-encoding");
    params.insert("lang", "日本語");
    params.insert("page", "2");

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    println!("Encoded:\n{query}");

    println!("Decoded:");
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match (decode(key), decode(value)) {
            (Ok(key), Ok(value)) => println!("  {key} = {value}"),
            (Err(err), _) | (_, Err(err)) => println!("  {pair}: {err}"),
        }
    }
}
