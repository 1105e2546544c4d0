use cosmwasm_std::Event;

/// Value of the first attribute `key` found on events of type `ty`. Multi-test prefixes the types
/// of contract events with `wasm-`.
pub fn find_event_attr(events: &[Event], ty: &str, key: &str) -> Option<String> {
    events
        .iter()
        .filter(|event| event.ty == ty || event.ty.strip_prefix("wasm-") == Some(ty))
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.clone())
}

/// Whether any event has type `ty`, with or without the `wasm-` prefix
pub fn has_event(events: &[Event], ty: &str) -> bool {
    events.iter().any(|event| event.ty == ty || event.ty.strip_prefix("wasm-") == Some(ty))
}
