//! HTML builders for pages, sections, and htmx partials.
//!
//! Server-driven reactivity: full pages come wrapped in [`wrap_page`], htmx
//! requests get bare fragments swapped into `#main`, and the two interactive
//! widgets (listing filter, ROI calculator) re-render via `/partials/*`.

use crate::catalog::{FilterState, Property, AREAS};
use crate::roi::CalculatorState;
use crate::whatsapp;

/// HTML-escape a string to prevent XSS in hand-built HTML responses.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Group an AED amount with thousands separators.
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/* ------------------------------- Page shell ------------------------------- */

/// Wrap fragment HTML in the base page shell for direct URL access.
pub fn wrap_page(title: &str, content: &str, phone: &str) -> String {
    let chat_link = whatsapp::wa_link(phone, whatsapp::GREETING);
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Dubai Property Hub | {title}</title>
    <link rel="stylesheet" href="/static/style.css">
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
</head>
<body>
    <header class="navbar">
        <div class="brand">
            <div class="brand-mark"></div>
            <div>
                <div class="brand-name">Dubai Property Hub</div>
                <div class="brand-tag">Luxury &#8226; ROI &#8226; Verified Deals</div>
            </div>
        </div>
        <nav class="nav">
            <a href="/#roi">ROI</a>
            <a href="/#categories">Categories</a>
            <a href="/listings" hx-get="/listings" hx-target="#main" hx-push-url="true">Listings</a>
            <a href="/locations" hx-get="/locations" hx-target="#main" hx-push-url="true">Locations</a>
            <a href="/#builders">Builders</a>
            <a href="/about" hx-get="/about" hx-target="#main" hx-push-url="true">About</a>
            <a href="/contact" hx-get="/contact" hx-target="#main" hx-push-url="true">Contact</a>
        </nav>
        <a class="cta" href="/contact">Book a Call</a>
    </header>
    <main id="main">
{content}
    </main>
    <footer class="footer">
        <div>
            <div class="brand-name">Dubai Property Hub</div>
            <div class="brand-tag">Luxury listings &#8226; Verified ROI &#8226; Secure transaction journey</div>
        </div>
        <div class="fineprint">&#169; Dubai Property Hub. All rights reserved.</div>
    </footer>
    <a class="wa-button" href="{chat_link}" target="_blank" rel="noreferrer" aria-label="Chat on WhatsApp">WhatsApp</a>
</body>
</html>"##,
        title = html_escape(title),
        content = content,
        chat_link = chat_link,
    )
}

/* ------------------------------ Static copy ------------------------------- */

const TRUST_ITEMS: &[(&str, &str)] = &[
    ("Dubai-ready", "Luxury-first design and tone"),
    ("Fast decisions", "ROI clarity and shortlists"),
    ("Secure journey", "Step-by-step process"),
    ("Always reachable", "WhatsApp-first support"),
];

const ROI_COMPARISON: &[(&str, &str, &str, &str)] = &[
    ("Downtown", "Luxury Towers", "6-8%", "Low"),
    ("Dubai Marina", "Waterfront", "7-9%", "Low"),
    ("Business Bay", "Investor Core", "8-11%", "Med"),
    ("JVC", "Value Growth", "8-10%", "Med"),
];

const CATEGORIES: &[(&str, &str)] = &[
    ("Waterfront Luxury", "Marina, Harbour, Canal views"),
    ("Downtown Signature", "Iconic skyline, prime lifestyle"),
    ("Investor Core", "Business Bay, high rental demand"),
    ("Family Communities", "Parks, schools, value growth"),
    ("Off-Plan Launches", "Early pricing, flexible plans"),
    ("Ready to Move", "Immediate handover, rental-ready"),
];

const JOURNEY_STEPS: &[(&str, &str, &str)] = &[
    ("01", "Discovery", "Budget, purpose, timeline, preferred areas."),
    ("02", "Shortlist", "3 best options with ROI and payment plan fit."),
    ("03", "Viewing / Virtual", "On-site tours or high-end walkthroughs."),
    ("04", "Booking", "Reservation, paperwork, and secure deposits."),
    ("05", "Handover", "Snagging, keys, and move-in or rent setup."),
    ("06", "Aftercare", "Property management, resale, and upgrades."),
];

const EXIT_OPTIONS: &[(&str, &str)] = &[
    ("Rent & Hold", "Stable cashflow with managed tenancy."),
    ("Flip on Milestones", "Resell near handover or demand peaks."),
    ("Upgrade & Resell", "Furnish and stage for higher market value."),
];

const LOCATION_GUIDE: &[(&str, &str)] = &[
    ("Downtown", "Iconic lifestyle and prime resale"),
    ("Dubai Marina", "Waterfront rentals and demand"),
    ("Business Bay", "Investor hub near downtown"),
    ("JVC", "Value growth plus family appeal"),
];

const BUILDERS: &[&str] = &[
    "Emaar (style benchmark)",
    "Damac (luxury variety)",
    "Nakheel (community scale)",
    "Sobha (premium finish)",
    "Select Group (Marina strength)",
    "Ellington (design-led)",
];

const PRICING_TIERS: &[(&str, &str, [&str; 3], bool)] = &[
    (
        "Entry Investor",
        "AED 800K+",
        ["High-demand areas", "Cashflow-first shortlist", "Flexible payment plans"],
        false,
    ),
    (
        "Luxury Core",
        "AED 1.5M+",
        ["Prime skyline options", "Balanced ROI + lifestyle", "Developer preference list"],
        true,
    ),
    (
        "Ultra Premium",
        "AED 3M+",
        ["Signature residences", "Private viewings", "Concierge transaction support"],
        false,
    ),
];

const OFFERS: &[(&str, &str)] = &[
    ("Launch Offer", "Early-bird pricing plus preferred unit selection."),
    ("Payment Plan", "Flexible installments designed for investors."),
    ("Premium Incentives", "Select projects include service charge waivers."),
];

const SECURITY_POINTS: &[(&str, &str)] = &[
    ("Verified Documents", "We validate key details before you commit."),
    ("Transparent Process", "Clear steps, timelines, and responsibilities."),
    ("Trusted Partners", "Mortgage, legal, and property management support."),
];

/* ------------------------------- Home page -------------------------------- */

/// Content fragment for `/`: all promotional sections in order.
pub fn home_page(properties: &[Property], phone: &str) -> String {
    let mut page = String::new();
    page.push_str(&hero_section());
    page.push_str(&trust_bar());
    page.push_str(&roi_compare_section());
    page.push_str(&categories_section());
    page.push_str(&featured_section(properties, phone));
    page.push_str(&security_section());
    page.push_str(&journey_section());
    page.push_str(&exit_section());
    page.push_str(&location_guide_section());
    page.push_str(&builders_section());
    page.push_str(&pricing_section());
    page.push_str(&offers_section());
    page.push_str(&contact_section());
    page
}

fn hero_section() -> String {
    r##"<section class="hero">
    <span class="pill">Dubai &#8226; Premium Listings &#8226; Verified ROI</span>
    <h1>Luxury Real Estate,<span>curated for investors and end-users.</span></h1>
    <p>Explore signature towers, waterfront residences, and high-yield communities,
    with clear ROI comparisons and a secure transaction journey.</p>
    <div class="hero-actions">
        <a class="cta" href="/listings">View Featured Listings</a>
        <a class="ghost" href="#roi">Compare ROI</a>
    </div>
    <div class="stats">
        <div class="stat"><div class="stat-label">Avg ROI Range</div><div class="stat-value">6-11%</div></div>
        <div class="stat"><div class="stat-label">Prime Areas</div><div class="stat-value">12+</div></div>
        <div class="stat"><div class="stat-label">Client Support</div><div class="stat-value">End-to-End</div></div>
    </div>
</section>
"##
    .to_string()
}

fn trust_bar() -> String {
    let items: String = TRUST_ITEMS
        .iter()
        .map(|(title, desc)| {
            format!(
                r#"<div class="card small"><div class="card-title">{title}</div><div class="card-desc">{desc}</div></div>"#
            )
        })
        .collect();
    format!(r#"<section class="trust-bar"><div class="grid four">{items}</div></section>"#)
}

fn roi_compare_section() -> String {
    let rows: String = ROI_COMPARISON
        .iter()
        .map(|(area, kind, roi, risk)| {
            format!(
                r#"<tr><td class="strong">{area}</td><td>{kind}</td><td>{roi}</td><td>{risk}</td></tr>"#
            )
        })
        .collect();
    format!(
        r#"<section id="roi" class="section">
    <span class="pill">ROI Comparison</span>
    <h2>See the returns before you decide.</h2>
    <p>Expected yield ranges by area and category, so you can compare options like an investor.</p>
    <table class="roi-table">
        <thead><tr><th>Area</th><th>Category</th><th>ROI (est.)</th><th>Risk</th></tr></thead>
        <tbody>{rows}</tbody>
    </table>
</section>
"#
    )
}

fn categories_section() -> String {
    let cards: String = CATEGORIES
        .iter()
        .map(|(title, desc)| {
            format!(
                r#"<div class="card"><div class="card-title">{title}</div><div class="card-desc">{desc}</div></div>"#
            )
        })
        .collect();
    format!(
        r#"<section id="categories" class="section alt">
    <span class="pill">Categories</span>
    <h2>Choose the lifestyle. Or choose the yield.</h2>
    <p>Luxury buyers and investors need different shortlists, so we separate them clearly.</p>
    <div class="grid three">{cards}</div>
</section>
"#
    )
}

fn featured_section(properties: &[Property], phone: &str) -> String {
    let cards: String = properties
        .iter()
        .map(|p| listing_card(p, phone))
        .collect();
    format!(
        r#"<section id="listings" class="section">
    <span class="pill">Featured Listings</span>
    <h2>Handpicked opportunities, not endless scrolling.</h2>
    <p>A curated selection with clear pricing and quick WhatsApp requests.</p>
    <div class="grid two">{cards}</div>
    <a class="ghost" href="/listings">Browse All Listings</a>
</section>
"#
    )
}

fn security_section() -> String {
    let points: String = SECURITY_POINTS
        .iter()
        .map(|(title, desc)| {
            format!(
                r#"<div class="card"><div class="card-title">{title}</div><div class="card-desc">{desc}</div></div>"#
            )
        })
        .collect();
    format!(
        r#"<section class="section alt">
    <span class="pill">Client Security</span>
    <h2>Luxury feel. Bank-grade clarity.</h2>
    <p>Premium service means you always know what happens next, and what your money is doing.</p>
    <div class="grid three">{points}</div>
</section>
"#
    )
}

fn journey_section() -> String {
    let steps: String = JOURNEY_STEPS
        .iter()
        .map(|(n, title, desc)| {
            format!(
                r#"<div class="card"><div class="step-number">{n}</div><div class="card-title">{title}</div><div class="card-desc">{desc}</div></div>"#
            )
        })
        .collect();
    format!(
        r#"<section class="section">
    <span class="pill">Transaction Journey</span>
    <h2>From first message to keys, smoothly.</h2>
    <div class="grid three">{steps}</div>
</section>
"#
    )
}

fn exit_section() -> String {
    let options: String = EXIT_OPTIONS
        .iter()
        .map(|(title, desc)| {
            format!(
                r#"<div class="card small"><div class="card-title">{title}</div><div class="card-desc">{desc}</div></div>"#
            )
        })
        .collect();
    format!(
        r#"<section class="section alt">
    <span class="pill">Exit Strategy</span>
    <h2>Plan your exit before you enter.</h2>
    <p>Rent, flip, or hold, decided on your profile rather than on habit.</p>
    <div class="grid three">{options}</div>
</section>
"#
    )
}

fn location_guide_section() -> String {
    let areas: String = LOCATION_GUIDE
        .iter()
        .map(|(area, desc)| {
            format!(
                r#"<div class="card"><div class="card-title">{area}</div><div class="card-desc">{desc}</div></div>"#
            )
        })
        .collect();
    format!(
        r#"<section id="locations" class="section">
    <span class="pill">Location Guide</span>
    <h2>Pick the right area, not just the popular one.</h2>
    <div class="grid two">{areas}</div>
</section>
"#
    )
}

fn builders_section() -> String {
    let cards: String = BUILDERS
        .iter()
        .map(|b| format!(r#"<div class="card small"><div class="card-title">{b}</div></div>"#))
        .collect();
    format!(
        r#"<section id="builders" class="section alt">
    <span class="pill">Builders</span>
    <h2>Only reputable developers in your shortlist.</h2>
    <div class="grid three">{cards}</div>
</section>
"#
    )
}

fn pricing_section() -> String {
    let cards: String = PRICING_TIERS
        .iter()
        .map(|(title, price, points, highlight)| {
            let class = if *highlight { "card tier highlight" } else { "card tier" };
            let badge = if *highlight {
                r#"<span class="pill">Most Popular</span>"#
            } else {
                ""
            };
            let bullet_list: String = points
                .iter()
                .map(|p| format!(r#"<li>{p}</li>"#))
                .collect();
            format!(
                r#"<div class="{class}"><div class="card-title">{title} {badge}</div><div class="tier-price">{price}</div><ul>{bullet_list}</ul><a class="cta" href="/contact">Get Matches</a></div>"#
            )
        })
        .collect();
    format!(
        r#"<section class="section">
    <span class="pill">Pricing</span>
    <h2>Clear tiers, luxury feel.</h2>
    <div class="grid three">{cards}</div>
</section>
"#
    )
}

fn offers_section() -> String {
    let cards: String = OFFERS
        .iter()
        .map(|(title, desc)| {
            format!(
                r#"<div class="card"><div class="card-title">{title}</div><div class="card-desc">{desc}</div><a class="link" href="/contact">Request Details</a></div>"#
            )
        })
        .collect();
    format!(
        r#"<section class="section alt">
    <span class="pill">Active Offers</span>
    <h2>Limited-time advantages worth knowing.</h2>
    <div class="grid three">{cards}</div>
</section>
"#
    )
}

fn contact_section() -> String {
    format!(
        r#"<section id="contact" class="section">
    <span class="pill">Contact</span>
    <h2>Get a curated shortlist in 15 minutes.</h2>
    <p>Send your budget and goal. We respond with 3 best options and brochures on WhatsApp.</p>
{form}
</section>
"#,
        form = contact_form(),
    )
}

/// Contact form shared by the home section and the contact page. The POST
/// handler turns the fields into a pre-filled wa.me redirect.
pub fn contact_form() -> String {
    r#"    <form class="contact-form" method="post" action="/contact">
        <input name="name" placeholder="Your Name">
        <textarea name="message" placeholder="Your Requirement"></textarea>
        <button class="cta" type="submit">Send via WhatsApp</button>
        <p class="fineprint">You get a reply on WhatsApp. No spam, no endless follow-ups.</p>
    </form>
"#
    .to_string()
}

/* ----------------------------- Listings page ------------------------------ */

/// A single property card with a pre-filled enquiry link.
pub fn listing_card(property: &Property, phone: &str) -> String {
    let enquiry = whatsapp::wa_link(phone, &whatsapp::listing_message(&property.title));
    format!(
        r#"<div class="card listing">
    <img src="{image}" alt="{title}">
    <div class="listing-body">
        <div class="card-title">{title}</div>
        <div class="card-desc">{area} &#8226; {kind}</div>
        <div class="listing-row"><span>AED {price}</span><span>ROI {roi}%</span></div>
        <a class="cta" href="{enquiry}" target="_blank" rel="noreferrer">Get Details</a>
    </div>
</div>
"#,
        image = html_escape(&property.image),
        title = html_escape(&property.title),
        area = html_escape(&property.area),
        kind = html_escape(&property.kind),
        price = format_price(property.price),
        roi = property.roi,
    )
}

/// Filter bar plus grid, the htmx swap target for `/partials/listings`.
pub fn listing_panel(filter: &FilterState, properties: &[Property], phone: &str) -> String {
    let buttons: String = AREAS
        .iter()
        .map(|area| {
            let class = if *area == filter.selected {
                "filter-btn active"
            } else {
                "filter-btn"
            };
            format!(
                r##"<button class="{class}" hx-get="/partials/listings?area={encoded}" hx-target="#listing-panel">{area}</button>"##,
                encoded = urlencoding::encode(area),
            )
        })
        .collect();

    let visible = filter.visible(properties);
    let grid: String = if visible.is_empty() {
        r#"<p class="empty">No listings in this area yet. Ask us for off-market options.</p>"#.to_string()
    } else {
        visible.iter().map(|p| listing_card(p, phone)).collect()
    };

    format!(
        r#"<div id="listing-panel">
    <div class="filter-bar">{buttons}</div>
    <div class="grid three">{grid}</div>
</div>
"#
    )
}

/// Content fragment for `/listings`: headline, filterable grid, ROI widget.
pub fn listings_page(filter: &FilterState, properties: &[Property], phone: &str) -> String {
    format!(
        r#"<section class="section">
    <h1>Luxury Listings</h1>
{panel}
{widget}
</section>
"#,
        panel = listing_panel(filter, properties, phone),
        widget = roi_widget(&CalculatorState::default()),
    )
}

/* ------------------------------- ROI widget ------------------------------- */

/// The calculator form. Every input edit re-derives `#roi-result` from the
/// server, mirroring a recompute-on-change UI.
pub fn roi_widget(state: &CalculatorState) -> String {
    format!(
        r##"<form class="card roi-widget" hx-get="/partials/roi" hx-target="#roi-result" hx-trigger="input delay:300ms">
    <div class="card-title">ROI Calculator</div>
    <input type="number" name="price" placeholder="Property Price (AED)">
    <input type="number" name="rent" placeholder="Monthly Rent (AED)">
    <div id="roi-result">{result}</div>
</form>
"##,
        result = roi_result(crate::roi::compute_roi(state)),
    )
}

/// The derived percentage, rounded to two decimals for display.
pub fn roi_result(roi: f64) -> String {
    format!(r#"<p class="roi-value">Estimated ROI: {roi:.2}%</p>"#)
}

/* ------------------------------ Other pages ------------------------------- */

pub fn locations_page() -> String {
    format!(
        r#"<section class="section">
    <h1>Locations</h1>
    <p>We match your purpose to area DNA: rental demand, lifestyle, growth, and liquidity.</p>
{guide}
</section>
"#,
        guide = location_guide_section(),
    )
}

pub fn about_page() -> String {
    r#"<section class="section">
    <h1>About Dubai Property Hub</h1>
    <p>A boutique brokerage for investors and end-users: verified listings,
    transparent fees, and a secure step-by-step transaction journey.</p>
    <p>We present expected yield ranges by area and category, shortlist three
    best-fit options for every enquiry, and stay reachable on WhatsApp from
    first message to keys.</p>
</section>
"#
    .to_string()
}

pub fn contact_page() -> String {
    format!(
        r#"<section class="section">
    <h1>Contact Us</h1>
{form}
</section>
"#,
        form = contact_form(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_properties;

    #[test]
    fn test_html_escape_covers_markup_characters() {
        assert_eq!(
            html_escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;"
        );
    }

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(950), "950");
        assert_eq!(format_price(950_000), "950,000");
        assert_eq!(format_price(2_400_000), "2,400,000");
    }

    #[test]
    fn test_wrap_page_escapes_title_and_links_whatsapp() {
        let page = wrap_page("<Listings>", "<p>hi</p>", "971500000000");
        assert!(page.contains("Dubai Property Hub | &lt;Listings&gt;"));
        assert!(page.contains("<p>hi</p>"));
        assert!(page.contains("https://wa.me/971500000000?text="));
    }

    #[test]
    fn test_listing_panel_marks_selection_and_filters_grid() {
        let props = seed_properties();
        let panel = listing_panel(&FilterState::new().select("Marina"), &props, "971500000000");
        assert!(panel.contains(r#"hx-get="/partials/listings?area=Business%20Bay""#));
        assert!(panel.contains("Marina Waterfront Apartment"));
        assert!(!panel.contains("Palm Premium Residence"));
    }

    #[test]
    fn test_empty_filter_result_renders_empty_state() {
        let props = seed_properties();
        let panel = listing_panel(&FilterState::new().select("Atlantis"), &props, "971500000000");
        assert!(panel.contains("No listings in this area yet"));
    }

    #[test]
    fn test_roi_result_rounds_to_two_decimals() {
        assert!(roi_result(12.0).contains("12.00%"));
        assert!(roi_result(9.0).contains("9.00%"));
    }

    #[test]
    fn test_home_page_contains_every_section_anchor() {
        let props = seed_properties();
        let home = home_page(&props, "971500000000");
        for anchor in ["id=\"roi\"", "id=\"categories\"", "id=\"listings\"", "id=\"locations\"", "id=\"builders\"", "id=\"contact\""] {
            assert!(home.contains(anchor), "missing {anchor}");
        }
    }

    #[test]
    fn test_listing_card_prefills_enquiry_link() {
        let props = seed_properties();
        let card = listing_card(&props[3], "971500000000");
        assert!(card.contains("https://wa.me/971500000000?text=Hi%2C%20I%27m%20interested%20in%20Palm%20Premium%20Residence"));
    }
}
