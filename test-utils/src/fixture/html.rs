/// Rendered PlayStation status page with `status_text` in the marker span.
pub fn playstation_status(status_text: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>PlayStation Network Service Status</title></head>
  <body>
    <header><span class="offscreen">Skip to content</span></header>
    <div id="statusArea" class="status-area">
      <div class="status-icon status-ok"></div>
      <span class="offscreen">{}</span>
      <p>Check the status of PlayStation Network services.</p>
    </div>
  </body>
</html>"#,
        status_text
    )
}

/// PlayStation page as served before its scripts run: no status area yet.
pub fn playstation_unrendered() -> String {
    r#"<!DOCTYPE html>
<html>
  <body>
    <div id="app"></div>
    <noscript>Please enable JavaScript.</noscript>
  </body>
</html>"#
        .to_string()
}

/// Rendered Xbox status page with `status_text` in the first status span.
pub fn xbox_status(status_text: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <body>
    <div id="root">
      <div class="ms-Stack css-100"><span>Xbox status</span></div>
      <div class="ms-Stack css-141">
        <span>{}</span>
        <span>Last updated a few minutes ago</span>
      </div>
    </div>
  </body>
</html>"#,
        status_text
    )
}

/// Xbox page whose layout no longer carries the status stack.
pub fn xbox_without_status_stack() -> String {
    r#"<!DOCTYPE html>
<html>
  <body>
    <div id="root">
      <div class="ms-Stack css-100"><span>Xbox status</span></div>
    </div>
  </body>
</html>"#
        .to_string()
}
