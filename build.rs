const COMMANDS: &[&str] = &[
    "open_camera",
    "trigger_shutter",
    "cancel_capture",
    "capture_state",
    "check_permission",
    "request_permission",
];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}
