use super::*;

#[test]
fn tweet_intent_escapes_query_characters() {
    let url = tweet_intent_url("https://x.test/campaign/a b?ref=é&n=1");
    assert!(url.ends_with("&url=https%3A%2F%2Fx.test%2Fcampaign%2Fa%20b%3Fref%3D%C3%A9%26n%3D1"));
}

#[test]
fn tweet_intent_embeds_page_url() {
    assert_eq!(
        tweet_intent_url("https://coffercard.com/campaign/abc"),
        "https://twitter.com/intent/tweet?text=Check%20out%20this%20prize%20wheel%21&url=https%3A%2F%2Fcoffercard.com%2Fcampaign%2Fabc"
    );
}

#[test]
fn claims_file_name_is_filesystem_safe() {
    assert_eq!(claims_file_name("Spring Sale"), "campaign_claims_Spring_Sale.xlsx");
    assert_eq!(claims_file_name("a/b"), "campaign_claims_a_b.xlsx");
}

#[test]
fn qr_file_name_uses_campaign_slug() {
    assert_eq!(qr_file_name(" Spring Sale "), "Spring_Sale_qr.svg");
}

#[test]
fn browser_effects_are_inert_off_browser() {
    assert!(!futures::executor::block_on(copy_to_clipboard("x")));
    assert!(!confirm("sure?"));
    assert_eq!(current_href(), "");
    assert!(download_bytes("f.xlsx", XLSX_MIME, b"x").is_err());
}
