use std::fs;

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    // The formatter refuses an empty currency glyph, so catch it here too
    let symbol = table
        .get("format")
        .and_then(|format| format.get("currency_symbol"))
        .and_then(|symbol| symbol.as_str());
    if symbol == Some("") {
        panic!("default_config.toml: format.currency_symbol must not be empty");
    }
}
