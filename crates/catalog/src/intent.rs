//! Navigation intents.
//!
//! A navigation descriptor is a URL fragment such as `#category=Toys&page=2`
//! or a bare token such as `#hotdeal`. [`NavigationRequest::parse`] decodes it
//! into exactly one [`NavigationIntent`]; [`NavigationIntent::fragment`] goes
//! the other way when building pagination links.
//!
//! Precedence, first match wins:
//!
//! 1. `product=<id>` (detail view)
//! 2. `search=<term>`
//! 3. leading `category=<name>` (empty name means every category)
//! 4. leading `all`
//! 5. leading `under1000`, then `hotdeal`
//! 6. leading `guide`, then `faq`
//! 7. home

use std::borrow::Cow;

use serde::Serialize;

use alyomi_core::ProductId;

/// Ceiling of the `under1000` special view, in currency units.
pub const PRICE_CEILING_DEFAULT: u64 = 1000;

const TOKEN_ALL: &str = "all";
const TOKEN_HOT_DEAL: &str = "hotdeal";
const TOKEN_UNDER: &str = "under";
const TOKEN_UNDER_DEFAULT: &str = "under1000";
const TOKEN_GUIDE: &str = "guide";
const TOKEN_FAQ: &str = "faq";

/// Named, non-category listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialView {
    /// Products whose sale price is at most `max`.
    PriceCeiling { max: u64 },
    /// Every product, highest discount first.
    HotDeal,
}

impl SpecialView {
    pub fn token(&self) -> String {
        match self {
            SpecialView::PriceCeiling { max } => format!("{TOKEN_UNDER}{max}"),
            SpecialView::HotDeal => TOKEN_HOT_DEAL.to_string(),
        }
    }

    /// Only the fixed `under1000` ceiling has a token; other ceilings are
    /// reachable programmatically but not from a fragment.
    fn from_token(token: &str) -> Option<Self> {
        match token {
            TOKEN_HOT_DEAL => Some(SpecialView::HotDeal),
            TOKEN_UNDER_DEFAULT => Some(SpecialView::PriceCeiling {
                max: PRICE_CEILING_DEFAULT,
            }),
            _ => None,
        }
    }
}

/// Static informational pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoPage {
    Guide,
    Faq,
}

impl InfoPage {
    pub fn token(&self) -> &'static str {
        match self {
            InfoPage::Guide => TOKEN_GUIDE,
            InfoPage::Faq => TOKEN_FAQ,
        }
    }
}

/// What the shopper asked to see.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum NavigationIntent {
    Detail(ProductId),
    Search(String),
    /// `None` lists every category.
    Category(Option<String>),
    All,
    Special(SpecialView),
    Info(InfoPage),
    Home,
}

impl NavigationIntent {
    /// Whether the intent produces a paginated product listing.
    pub fn is_listing(&self) -> bool {
        matches!(
            self,
            NavigationIntent::Search(_)
                | NavigationIntent::Category(_)
                | NavigationIntent::All
                | NavigationIntent::Special(_)
        )
    }

    /// Fragment (without `#`) that navigates to `page` of this intent.
    pub fn fragment(&self, page: usize) -> String {
        match self {
            NavigationIntent::Category(Some(name)) => {
                format!("category={}&page={page}", urlencoding::encode(name))
            }
            NavigationIntent::Category(None) | NavigationIntent::All => {
                format!("{TOKEN_ALL}&page={page}")
            }
            NavigationIntent::Search(term) => {
                format!("search={}&page={page}", urlencoding::encode(term))
            }
            NavigationIntent::Special(view) => format!("{}&page={page}", view.token()),
            NavigationIntent::Detail(id) => {
                format!("product={}", urlencoding::encode(&id.to_string()))
            }
            NavigationIntent::Info(info) => info.token().to_string(),
            NavigationIntent::Home => format!("page={page}"),
        }
    }
}

/// A decoded navigation event: the intent plus a 1-based page.
///
/// Page `0` is representable and paginates to an empty slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NavigationRequest {
    pub intent: NavigationIntent,
    pub page: usize,
}

impl NavigationRequest {
    pub fn new(intent: NavigationIntent, page: usize) -> Self {
        Self { intent, page }
    }

    /// Decode a fragment. Never fails: anything unrecognised is `Home`.
    pub fn parse(descriptor: &str) -> Self {
        let params = FragmentParams::parse(descriptor);
        let page = parse_page(params.get("page"));

        Self {
            intent: resolve_intent(&params),
            page,
        }
    }
}

impl Default for NavigationRequest {
    fn default() -> Self {
        Self::new(NavigationIntent::Home, 1)
    }
}

fn resolve_intent(params: &FragmentParams) -> NavigationIntent {
    if let Some(id) = params.get("product").and_then(|v| v.parse::<ProductId>().ok()) {
        return NavigationIntent::Detail(id);
    }

    if let Some(term) = params.get("search").filter(|t| !t.is_empty()) {
        return NavigationIntent::Search(term.to_string());
    }

    let Some((key, value)) = params.leading() else {
        return NavigationIntent::Home;
    };

    if key == "category" {
        let name = Some(value).filter(|v| !v.is_empty()).map(str::to_string);
        return NavigationIntent::Category(name);
    }

    if key == TOKEN_ALL {
        return NavigationIntent::All;
    }

    if let Some(view) = SpecialView::from_token(key) {
        return NavigationIntent::Special(view);
    }

    match key {
        TOKEN_GUIDE => NavigationIntent::Info(InfoPage::Guide),
        TOKEN_FAQ => NavigationIntent::Info(InfoPage::Faq),
        _ => NavigationIntent::Home,
    }
}

/// Leading integer of a page value; absent or non-numeric means page 1,
/// negative values mean page 0 and oversized values saturate.
fn parse_page(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return 1;
    };

    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if digits.is_empty() {
        return 1;
    }
    if negative {
        return 0;
    }
    digits.parse().unwrap_or(usize::MAX)
}

/// `key=value` pairs of a fragment, in order, percent-decoded.
#[derive(Debug, Default)]
struct FragmentParams {
    pairs: Vec<(String, String)>,
}

impl FragmentParams {
    fn parse(descriptor: &str) -> Self {
        let raw = descriptor.strip_prefix('#').unwrap_or(descriptor);
        let pairs = raw
            .split('&')
            .filter(|piece| !piece.is_empty())
            .map(|piece| {
                let (key, value) = piece.split_once('=').unwrap_or((piece, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self { pairs }
    }

    /// First value for `key`.
    fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn leading(&self) -> Option<(&str, &str)> {
        self.pairs.first().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(Cow::Borrowed(s)) => s.to_string(),
        Ok(Cow::Owned(s)) => s,
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(descriptor: &str) -> NavigationIntent {
        NavigationRequest::parse(descriptor).intent
    }

    #[test]
    fn empty_fragment_is_home() {
        assert_eq!(NavigationRequest::parse(""), NavigationRequest::default());
        assert_eq!(NavigationRequest::parse("#"), NavigationRequest::default());
    }

    #[test]
    fn parses_category_with_page() {
        let req = NavigationRequest::parse("#category=Toys&page=3");
        assert_eq!(req.intent, NavigationIntent::Category(Some("Toys".into())));
        assert_eq!(req.page, 3);
    }

    #[test]
    fn empty_category_means_every_category() {
        assert_eq!(intent("category="), NavigationIntent::Category(None));
        assert_eq!(intent("category"), NavigationIntent::Category(None));
    }

    #[test]
    fn category_values_are_percent_decoded() {
        assert_eq!(
            intent("category=%ED%99%88%20%26%20%EA%B0%80%EB%93%A0"),
            NavigationIntent::Category(Some("홈 & 가든".into()))
        );
        assert_eq!(
            intent("category=Home+Garden"),
            NavigationIntent::Category(Some("Home Garden".into()))
        );
    }

    #[test]
    fn undecodable_values_keep_raw_text() {
        assert_eq!(intent("search=%FF"), NavigationIntent::Search("%FF".into()));
    }

    #[test]
    fn parses_bare_tokens() {
        assert_eq!(intent("all"), NavigationIntent::All);
        assert_eq!(intent("#all&page=2"), NavigationIntent::All);
        assert_eq!(
            intent("under1000"),
            NavigationIntent::Special(SpecialView::PriceCeiling {
                max: PRICE_CEILING_DEFAULT
            })
        );
        assert_eq!(intent("hotdeal"), NavigationIntent::Special(SpecialView::HotDeal));
        assert_eq!(intent("guide"), NavigationIntent::Info(InfoPage::Guide));
        assert_eq!(intent("faq"), NavigationIntent::Info(InfoPage::Faq));
    }

    #[test]
    fn tokens_match_exactly() {
        assert_eq!(intent("allium"), NavigationIntent::Home);
        assert_eq!(intent("under"), NavigationIntent::Home);
        assert_eq!(intent("underdog"), NavigationIntent::Home);
        assert_eq!(intent("under500"), NavigationIntent::Home);
        assert_eq!(intent("under5"), NavigationIntent::Home);
        assert_eq!(intent("under01000"), NavigationIntent::Home);
        assert_eq!(intent("hotdeals"), NavigationIntent::Home);
    }

    #[test]
    fn markers_must_lead_the_fragment() {
        assert_eq!(intent("page=2&category=Toys"), NavigationIntent::Home);
        assert_eq!(intent("page=2&hotdeal"), NavigationIntent::Home);
    }

    #[test]
    fn detail_selector_wins_over_everything() {
        assert_eq!(
            intent("category=Toys&search=kitty&product=1005006"),
            NavigationIntent::Detail(ProductId::numeric(1005006))
        );
        assert_eq!(intent("product="), NavigationIntent::Home);
    }

    #[test]
    fn search_wins_over_markers() {
        assert_eq!(
            intent("category=Toys&search=kitty"),
            NavigationIntent::Search("kitty".into())
        );
        assert_eq!(intent("hotdeal&search=kitty"), NavigationIntent::Search("kitty".into()));
    }

    #[test]
    fn empty_search_falls_through() {
        assert_eq!(intent("all&search="), NavigationIntent::All);
    }

    #[test]
    fn category_wins_over_special_tokens() {
        assert_eq!(
            intent("category=Toys&hotdeal"),
            NavigationIntent::Category(Some("Toys".into()))
        );
    }

    #[test]
    fn page_defaults_and_degrades() {
        assert_eq!(NavigationRequest::parse("all").page, 1);
        assert_eq!(NavigationRequest::parse("all&page=").page, 1);
        assert_eq!(NavigationRequest::parse("all&page=abc").page, 1);
        assert_eq!(NavigationRequest::parse("all&page=2abc").page, 2);
        assert_eq!(NavigationRequest::parse("all&page=-3").page, 0);
        assert_eq!(NavigationRequest::parse("all&page=0").page, 0);
        assert_eq!(
            NavigationRequest::parse("all&page=99999999999999999999999").page,
            usize::MAX
        );
    }

    #[test]
    fn builds_fragments() {
        assert_eq!(
            NavigationIntent::Category(Some("Toys & Games".into())).fragment(2),
            "category=Toys%20%26%20Games&page=2"
        );
        assert_eq!(NavigationIntent::Category(None).fragment(3), "all&page=3");
        assert_eq!(NavigationIntent::All.fragment(1), "all&page=1");
        assert_eq!(
            NavigationIntent::Search("hello kitty".into()).fragment(4),
            "search=hello%20kitty&page=4"
        );
        assert_eq!(
            NavigationIntent::Special(SpecialView::HotDeal).fragment(2),
            "hotdeal&page=2"
        );
        assert_eq!(
            NavigationIntent::Special(SpecialView::PriceCeiling { max: 1000 }).fragment(2),
            "under1000&page=2"
        );
        assert_eq!(NavigationIntent::Home.fragment(5), "page=5");
    }

    #[test]
    fn fragments_parse_back_to_the_same_listing() {
        let intents = [
            NavigationIntent::Category(Some("홈 & 가든".into())),
            NavigationIntent::All,
            NavigationIntent::Search("kitty+plush 100%".into()),
            NavigationIntent::Special(SpecialView::HotDeal),
            NavigationIntent::Special(SpecialView::PriceCeiling { max: 1000 }),
            NavigationIntent::Detail(ProductId::numeric(7)),
            NavigationIntent::Info(InfoPage::Faq),
        ];

        for intent in intents {
            let req = NavigationRequest::parse(&intent.fragment(4));
            assert_eq!(req.intent, intent);
            if intent.is_listing() {
                assert_eq!(req.page, 4);
            }
        }
    }
}
