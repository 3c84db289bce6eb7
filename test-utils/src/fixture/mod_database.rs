/// A small PS3 game mods file.
///
/// Three entries across two categories. Only "Zombies Menu" mentions "zombies"
/// in its name; "Black Ops Plus" only mentions it in its description.
pub fn ps3_game_mods() -> String {
    serde_json::json!({
        "Mods": [
            {
                "Id": 101,
                "CategoryId": "BLUS30591",
                "Name": "Black Ops Plus",
                "Description": "Quality of life tweaks for multiplayer and ZOMBIES.",
                "Platform": "PS3",
                "CreatedBy": ["Mikey"],
                "SubmittedBy": "ohhsodead",
                "Version": "1.13",
                "GameMode": "Multiplayer",
                "ModType": "SPRX",
                "DownloadFiles": [
                    { "Name": "Black Ops Plus", "Version": "1.13", "Url": "https://example.com/bop-1.13.zip" }
                ]
            },
            {
                "Id": 102,
                "CategoryId": "BLUS30591",
                "Name": "Zombies Menu",
                "Description": "Round skipper and perk menu.",
                "Platform": "PS3",
                "CreatedBy": "Ghost",
                "SubmittedBy": "Ghost",
                "Version": 2,
                "GameMode": "Zombies",
                "ModType": "GSC",
                "DownloadFiles": [
                    { "Name": "Zombies Menu", "Version": "2", "Url": "https://example.com/zm-2.zip" },
                    { "Name": "Zombies Menu (Legacy)", "Version": "1", "Url": "https://example.com/zm-1.zip" }
                ]
            },
            {
                "Id": 103,
                "CategoryId": "NPUB99999",
                "Name": "Unlisted Game Trainer",
                "Description": "",
                "Platform": "PS3",
                "CreatedBy": "",
                "SubmittedBy": "anon",
                "Version": "0.1",
                "GameMode": "",
                "ModType": "EBOOT",
                "DownloadFiles": []
            }
        ]
    })
    .to_string()
}

/// Category list resolving `BLUS30591` only.
pub fn categories() -> String {
    serde_json::json!({
        "Categories": [
            { "Id": "BLUS30591", "Title": "Call of Duty: Black Ops", "Type": "Game" },
            { "Id": "NPUB30000", "Title": "Homebrew Utilities", "Type": "Homebrew" }
        ]
    })
    .to_string()
}
