//! Static page markup
//!
//! Every page is literal content. The screenshot strip on the home page
//! is rendered twice back to back so the client-side carousel can wrap
//! its scroll offset to zero without a visible jump.

use std::fmt::Write as _;

use vitrine_contact::{APP_NAME, SUPPORT_ADDRESS};

/// Screenshot assets shown in the carousel, in display order
const SCREENSHOTS: [&str; 5] = [
    "/assets/images/app-screenshot-1.png",
    "/assets/images/app-screenshot-2.png",
    "/assets/images/app-screenshot-3.png",
    "/assets/images/app-screenshot-4.png",
    "/assets/images/app-screenshot-5.png",
];

fn shell(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

/// Home page: hero, feature list, usage steps, and the screenshot strip
pub fn home() -> String {
    let mut strip = String::new();
    // Source list rendered twice: the duplicated window behind the
    // carousel's seamless wrap.
    for src in SCREENSHOTS.iter().chain(SCREENSHOTS.iter()) {
        let _ = write!(
            strip,
            "<figure class=\"shot\"><img src=\"{src}\" alt=\"{APP_NAME} app screen\"></figure>"
        );
    }

    let body = format!(
        "<header><h1>{APP_NAME}</h1><p>Every nearby review campaign, on one map.</p></header>\n\
         <section id=\"features\">\n\
         <h2>Features</h2>\n\
         <ul>\n\
         <li>Campaigns near you, surfaced first when location is allowed</li>\n\
         <li>Drag the map and search the visible area</li>\n\
         <li>Perks, deadlines, and distance at a glance</li>\n\
         <li>One tap through to the original campaign page</li>\n\
         <li>No sign-up needed to browse</li>\n\
         </ul>\n\
         </section>\n\
         <section id=\"how-to-use\">\n\
         <h2>How it works</h2>\n\
         <ol>\n\
         <li>Allow location access</li>\n\
         <li>Search the area you are looking at</li>\n\
         <li>Open the campaign you like</li>\n\
         </ol>\n\
         </section>\n\
         <section id=\"screenshots\">\n\
         <h2>In the app</h2>\n\
         <div class=\"carousel\" data-carousel>{strip}</div>\n\
         </section>\n\
         <footer><a href=\"/privacy\">Privacy policy</a> · <a href=\"/support\">Support</a></footer>"
    );
    shell(APP_NAME, &body)
}

/// Privacy policy page
pub fn privacy() -> String {
    let body = format!(
        "<h1>Privacy policy</h1>\n\
         <p>{APP_NAME} uses your location only while the app is open, to find\n\
         review campaigns near you. Location data is not stored on our servers\n\
         beyond the current search.</p>\n\
         <p>Browsing requires no account. Optional features such as keyword\n\
         alerts require signing in with an existing Apple, Google, or Kakao\n\
         account.</p>\n\
         <p>Questions about this policy can be sent to\n\
         <a href=\"mailto:{SUPPORT_ADDRESS}\">{SUPPORT_ADDRESS}</a>.</p>\n\
         <footer><a href=\"/\">Home</a></footer>"
    );
    shell("Privacy policy", &body)
}

/// Support page with the inquiry form
pub fn support() -> String {
    let body = format!(
        "<h1>Support</h1>\n\
         <p>Ran into a problem or have a question? Fill in the form and your\n\
         mail client will open with a prepared message.</p>\n\
         <form method=\"post\" action=\"/support\">\n\
         <label>Name <input name=\"name\" required></label>\n\
         <label>Email <input name=\"email\" type=\"email\" required></label>\n\
         <label>Device <input name=\"device\" placeholder=\"iPhone 15 Pro\"></label>\n\
         <label>App version <input name=\"app_version\" placeholder=\"2.0.8\"></label>\n\
         <label>Subject <input name=\"subject\" required></label>\n\
         <label>Message <textarea name=\"message\" rows=\"6\" required></textarea></label>\n\
         <button type=\"submit\">Send inquiry</button>\n\
         </form>\n\
         <p>Direct contact:\n\
         <a href=\"mailto:{SUPPORT_ADDRESS}\">{SUPPORT_ADDRESS}</a></p>\n\
         <footer><a href=\"/\">Home</a></footer>"
    );
    shell("Support", &body)
}

/// Result page after a form submission
///
/// `mailto` is present on success so the visitor can follow the link if
/// the automatic navigation was blocked.
pub fn submit_result(notice: &str, mailto: Option<&str>) -> String {
    let link = mailto
        .map(|uri| format!("<p><a href=\"{uri}\">Open the prepared email</a></p>\n"))
        .unwrap_or_default();
    let body = format!(
        "<h1>Support</h1>\n<p>{notice}</p>\n{link}<footer><a href=\"/support\">Back</a></footer>"
    );
    shell("Support", &body)
}
