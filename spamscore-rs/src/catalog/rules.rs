//! Default SpamAssassin rule scores
//!
//! Reference data for lookup and search only. Scores follow
//! <https://github.com/apache/spamassassin/tree/trunk/rulesrc/scores>.

use super::types::{RuleCatalogEntry, RuleCategory};

const fn entry(
    name: &'static str,
    score: f64,
    category: RuleCategory,
    description: &'static str,
) -> RuleCatalogEntry {
    RuleCatalogEntry {
        name,
        score,
        category,
        description,
    }
}

#[rustfmt::skip]
pub static DEFAULT_RULES: &[RuleCatalogEntry] = &[
    // Test patterns
    entry("GTUBE", 1000.0, RuleCategory::Test, "Generic Test for Unsolicited Bulk Email"),

    // 4.0 and above
    entry("KB_RATWARE_OUTLOOK_MID", 4.4, RuleCategory::Forgery, "Ratware Message-ID pretending to be Outlook"),
    entry("HELO_DYNAMIC_HCC", 4.3, RuleCategory::Network, "HELO contains dynamic IP pattern"),
    entry("HK_NAME_DRUGS", 4.3, RuleCategory::Content, "Pharmaceutical spam keywords in sender name"),
    entry("BITCOIN_EXTORT_01", 4.1, RuleCategory::Scam, "Bitcoin extortion/sextortion attempt"),
    entry("KB_RATWARE_MSGID", 4.1, RuleCategory::Forgery, "Ratware-style Message-ID detected"),
    entry("URI_PHISH", 4.0, RuleCategory::Phishing, "URI found in phishing database"),
    entry("FORGED_MUA_OUTLOOK", 4.0, RuleCategory::Forgery, "Forged Outlook mail user agent"),

    // 3.0 to 3.9
    entry("FSL_INTERIA_ABUSE", 3.9, RuleCategory::Network, "Sent from known abuse source"),
    entry("MSGID_OUTLOOK_INVALID", 3.9, RuleCategory::Forgery, "Invalid Outlook Message-ID format"),
    entry("KB_DATE_CONTAINS_TAB", 3.8, RuleCategory::Header, "Date header contains tab character"),
    entry("FILL_THIS_FORM_LONG", 3.8, RuleCategory::Phishing, "Contains form-filling phishing text"),
    entry("DOS_BODY_HIGH_NO_MID", 3.8, RuleCategory::Header, "High body score with no Message-ID"),
    entry("HTML_SHORT_CENTER", 3.8, RuleCategory::Html, "Short HTML message with centered text"),
    entry("PHISH_AZURE_CLOUDAPP", 3.5, RuleCategory::Phishing, "Link to Azure cloudapp phishing site"),
    entry("BITCOIN_MALF_HTML", 3.5, RuleCategory::Scam, "Bitcoin malware/scam in HTML content"),
    entry("ADVANCE_FEE_3_NEW", 3.5, RuleCategory::Scam, "Advance fee fraud (419 scam) patterns"),
    entry("FSL_HAS_TINYURL", 3.5, RuleCategory::Uri, "Contains TinyURL shortened link"),
    entry("HTML_TEXT_INVISIBLE_STYLE", 3.5, RuleCategory::Html, "Invisible text using CSS styling"),
    entry("URI_WP_DIRINDEX", 3.5, RuleCategory::Uri, "WordPress directory index exploit"),
    entry("PDS_FROM_2_EMAILS", 3.5, RuleCategory::Header, "From header contains two email addresses"),
    entry("REPLICA_WATCH", 3.5, RuleCategory::Content, "Replica watch spam keywords"),
    entry("SCC_CANSPAM_2", 3.4, RuleCategory::Legal, "Missing CAN-SPAM compliance elements"),
    entry("FROM_MISSP_FREEMAIL", 3.4, RuleCategory::Forgery, "Misspelled freemail provider in From"),
    entry("TO_EQ_FM_HTML_ONLY", 3.4, RuleCategory::Header, "To equals From, HTML only message"),
    entry("FROM_MISSP_PHISH", 3.2, RuleCategory::Phishing, "Misspelled domain in From (phishing)"),
    entry("MALE_ENHANCE", 3.1, RuleCategory::Content, "Male enhancement spam keywords"),
    entry("UNDISC_MONEY", 3.1, RuleCategory::Scam, "Undisclosed money transfer scam"),
    entry("DEAR_WINNER", 3.1, RuleCategory::Scam, "Lottery/prize winner scam"),
    entry("FROM_UNBAL2", 3.1, RuleCategory::Header, "Unbalanced quotes in From header"),
    entry("UNDISC_FREEM", 3.1, RuleCategory::Header, "Undisclosed recipients from freemail"),
    entry("FORGED_MUA_THEBAT_BOUN", 3.0, RuleCategory::Forgery, "Forged The Bat! mailer bounce"),
    entry("IMG_DIRECT_TO_MX", 3.0, RuleCategory::Uri, "Image links directly to mail server"),
    entry("LONG_INVISIBLE_TEXT", 3.0, RuleCategory::Html, "Long sections of invisible text"),
    entry("ACCT_PHISHING_MANY", 3.0, RuleCategory::Phishing, "Multiple account phishing indicators"),
    entry("URI_EXCESS_SLASHES", 3.0, RuleCategory::Uri, "Excessive slashes in URI (obfuscation)"),
    entry("URI_FIREBASEAPP", 3.0, RuleCategory::Phishing, "Firebase app link (often phishing)"),
    entry("GOOG_STO_EMAIL_PHISH", 3.0, RuleCategory::Phishing, "Google storage email phishing"),
    entry("HTML_ENTITY_ASCII", 3.0, RuleCategory::Html, "HTML entities for ASCII obfuscation"),
    entry("MONEY_FORM", 3.1, RuleCategory::Scam, "Money transfer form scam"),

    // 2.0 to 2.9
    entry("DOS_OE_TO_MX_IMAGE", 2.9, RuleCategory::Network, "Outlook Express to MX with image"),
    entry("X_MAILER_CME_6543_MSN", 2.9, RuleCategory::Forgery, "Forged MSN mailer header"),
    entry("MISSING_MID", 2.5, RuleCategory::Header, "Missing Message-ID header"),
    entry("TVD_PH_1", 2.3, RuleCategory::Phishing, "Phishing pattern detected"),
    entry("FUZZY_CREDIT", 2.3, RuleCategory::Content, "Fuzzy match on credit card terms"),
    entry("SUBJ_ALL_CAPS", 2.2, RuleCategory::Header, "Subject is all capital letters"),
    entry("FROM_EXCESS_BASE64", 2.1, RuleCategory::Header, "Excessive Base64 in From header"),
    entry("FUZZY_AMBIEN", 2.1, RuleCategory::Content, "Fuzzy match on pharmaceutical terms"),
    entry("RCVD_IN_BL_SPAMCOP_NET", 2.0, RuleCategory::Network, "Listed in SpamCop blocklist"),
    entry("RCVD_IN_XBL", 2.0, RuleCategory::Network, "Listed in Spamhaus XBL"),

    // 1.0 to 1.9
    entry("HTML_MESSAGE", 1.8, RuleCategory::Format, "HTML message (no plain text)"),
    entry("MISSING_HEADERS", 1.7, RuleCategory::Header, "Missing essential headers"),
    entry("FORGED_OUTLOOK_HTML", 1.6, RuleCategory::Forgery, "Outlook HTML signature forged"),
    entry("MIME_HTML_ONLY", 1.5, RuleCategory::Format, "MIME HTML only, no text part"),
    entry("RCVD_IN_SBL", 1.5, RuleCategory::Network, "Listed in Spamhaus SBL"),
    entry("RCVD_IN_PBL", 1.3, RuleCategory::Network, "Listed in Spamhaus PBL"),
    entry("SPF_FAIL", 1.2, RuleCategory::Auth, "SPF check failed"),
    entry("DKIM_INVALID", 1.0, RuleCategory::Auth, "DKIM signature invalid"),
    entry("RDNS_NONE", 1.0, RuleCategory::Network, "No reverse DNS for sending IP"),
    entry("URIBL_BLACK", 1.0, RuleCategory::Uri, "URI in Spamhaus URIBL blacklist"),

    // 0.1 to 0.9
    entry("BAYES_50", 0.8, RuleCategory::Bayes, "Bayesian spam probability 40-60%"),
    entry("HTML_FONT_LOW_CONTRAST", 0.5, RuleCategory::Html, "Low contrast font colors"),
    entry("DKIM_SIGNED", 0.1, RuleCategory::Auth, "DKIM signature present (not validated)"),
    entry("SPF_HELO_NONE", 0.1, RuleCategory::Auth, "No SPF record for HELO domain"),

    // Ham indicators
    entry("BAYES_00", -1.9, RuleCategory::Bayes, "Bayesian spam probability 0-1%"),
    entry("BAYES_05", -0.5, RuleCategory::Bayes, "Bayesian spam probability 1-5%"),
    entry("DKIM_VALID", -0.1, RuleCategory::Auth, "Valid DKIM signature"),
    entry("DKIM_VALID_AU", -0.1, RuleCategory::Auth, "DKIM valid, author domain match"),
    entry("DKIM_VALID_EF", -0.1, RuleCategory::Auth, "DKIM valid, envelope from match"),
    entry("SPF_PASS", -0.1, RuleCategory::Auth, "SPF check passed"),
    entry("ALL_TRUSTED", -1.0, RuleCategory::Network, "All relays are trusted"),
    entry("RCVD_IN_DNSWL_NONE", -0.0, RuleCategory::Network, "Listed in DNSWL, no trust level"),
    entry("RCVD_IN_DNSWL_LOW", -0.7, RuleCategory::Network, "Listed in DNSWL, low trust"),
    entry("RCVD_IN_DNSWL_MED", -2.3, RuleCategory::Network, "Listed in DNSWL, medium trust"),
    entry("RCVD_IN_DNSWL_HI", -5.0, RuleCategory::Network, "Listed in DNSWL, high trust"),
    entry("RCVD_IN_MSPIKE_H2", -0.5, RuleCategory::Network, "Cloudmark Sender Intelligence good"),
    entry("RCVD_IN_MSPIKE_H3", -1.0, RuleCategory::Network, "Cloudmark excellent reputation"),
    entry("RCVD_IN_MSPIKE_H4", -2.0, RuleCategory::Network, "Cloudmark outstanding reputation"),
    entry("USER_IN_WELCOMELIST", -100.0, RuleCategory::Whitelist, "Sender in user's welcomelist"),
    entry("USER_IN_DEF_WELCOMELIST", -50.0, RuleCategory::Whitelist, "Sender in default welcomelist"),
];
