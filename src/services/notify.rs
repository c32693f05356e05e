// Notificaciones visibles al usuario. Transientes: un aviso por evento.

pub fn success(message: &str) {
    log::info!("✅ {}", message);
    alert(message);
}

pub fn error(message: &str) {
    log::error!("❌ {}", message);
    alert(message);
}

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
