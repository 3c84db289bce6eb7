use serde_json::Value;
use serenity::all::CreateEmbed;

/// Serializes an embed builder into the JSON payload Discord would receive.
///
/// # Panics
/// - If the embed cannot be serialized (indicates a Serenity bug)
pub fn embed_json(embed: &CreateEmbed) -> Value {
    serde_json::to_value(embed).expect("Failed to serialize embed")
}

/// Looks up an embed field by name.
///
/// # Returns
/// - `Some((value, inline))` - The first field named `name`
/// - `None` - No such field
pub fn embed_field(embed: &CreateEmbed, name: &str) -> Option<(String, bool)> {
    let json = embed_json(embed);

    json["fields"].as_array()?.iter().find_map(|field| {
        if field["name"] == name {
            Some((
                field["value"].as_str().unwrap_or_default().to_string(),
                field["inline"].as_bool().unwrap_or(false),
            ))
        } else {
            None
        }
    })
}
