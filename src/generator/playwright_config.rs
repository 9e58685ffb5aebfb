use crate::config::config_model::TestSuiteConfig;

use super::js::escape_js_string;

pub const PLAYWRIGHT_CONFIG_FILE: &str = "playwright.config.ts";

/// Render a `playwright.config.ts` that runs the generated specs next to it.
pub fn render_playwright_config(config: &TestSuiteConfig) -> String {
    let workers = if config.parallel { "undefined" } else { "1" };
    let browser = config.browser.as_str();

    format!(
        "import {{ defineConfig }} from '@playwright/test';

export default defineConfig({{
  testDir: '.',
  testMatch: '**/*.spec.ts',
  timeout: {timeout},
  retries: {retries},
  workers: {workers},
  use: {{
    baseURL: '{base_url}',
    screenshot: 'only-on-failure',
    video: 'retain-on-failure',
    trace: 'retain-on-failure',
  }},
  projects: [
    {{
      name: '{browser}',
      use: {{ browserName: '{browser}' }},
    }},
  ],
  reporter: [['html'], ['list']],
}});
",
        timeout = config.timeout_ms,
        retries = config.retries,
        base_url = escape_js_string(&config.base_url),
    )
}
