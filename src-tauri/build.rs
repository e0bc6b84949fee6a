fn main() {
    // Embeds tauri.conf.json, the capability files and (on Windows) the icon resources.
    tauri_build::build()
}
