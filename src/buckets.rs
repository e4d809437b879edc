use std::fmt;

/// Buckets a 404 URL can be triaged into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Location landing pages
    Locations,
    /// Service pages
    Services,
    /// Articles and blog posts
    Content,
    /// Booking flow pages
    Booking,
    /// Authentication and account pages
    AuthAccount,
    /// Community pages
    Community,
    /// Legal, privacy and cookie pages
    Legal,
    /// Cleaning flow pages
    Flows,
    /// Framework build output and font assets
    StaticAssets,
    /// Everything no rule matched
    Misc,
}

impl Bucket {
    /// Label used in the summary and detail exports
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Locations => "locations",
            Bucket::Services => "services",
            Bucket::Content => "content",
            Bucket::Booking => "booking",
            Bucket::AuthAccount => "auth/account",
            Bucket::Community => "community",
            Bucket::Legal => "legal",
            Bucket::Flows => "flows",
            Bucket::StaticAssets => "static-assets",
            Bucket::Misc => "misc",
        }
    }

    /// Classify a URL into its bucket
    ///
    /// Walks the rule table in order and assigns the first matching bucket;
    /// URLs that match no rule fall through to `Misc`.
    pub fn for_url(url: &str) -> Self {
        for rule in RULES {
            if rule.tests.iter().any(|test| test.matches(url)) {
                ::log::debug!("Classifying as {}: {}", rule.bucket, url);
                return rule.bucket;
            }
        }
        ::log::debug!("Classifying as misc: {}", url);
        Bucket::Misc
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single literal test against the URL string
#[derive(Debug, Clone, Copy)]
pub enum UrlTest {
    /// URL contains the literal substring
    Contains(&'static str),
    /// URL ends with the literal suffix
    EndsWith(&'static str),
}

impl UrlTest {
    /// Case-sensitive literal match, no normalization
    pub fn matches(&self, url: &str) -> bool {
        match self {
            UrlTest::Contains(needle) => url.contains(needle),
            UrlTest::EndsWith(suffix) => url.ends_with(suffix),
        }
    }
}

/// One classification rule: a URL matching any of `tests` gets `bucket`
#[derive(Debug, Clone, Copy)]
pub struct BucketRule {
    pub bucket: Bucket,
    pub tests: &'static [UrlTest],
}

/// Ordered rule table. Order is significant: the first matching rule wins.
pub const RULES: &[BucketRule] = &[
    BucketRule {
        bucket: Bucket::Locations,
        tests: &[UrlTest::Contains("/locations/")],
    },
    BucketRule {
        bucket: Bucket::Services,
        tests: &[UrlTest::Contains("/services/")],
    },
    BucketRule {
        bucket: Bucket::Content,
        tests: &[
            UrlTest::Contains("/articles"),
            UrlTest::Contains("/article"),
            UrlTest::Contains("/blog"),
        ],
    },
    BucketRule {
        bucket: Bucket::Booking,
        tests: &[UrlTest::Contains("/booking")],
    },
    BucketRule {
        bucket: Bucket::AuthAccount,
        tests: &[UrlTest::Contains("/auth"), UrlTest::Contains("/account")],
    },
    BucketRule {
        bucket: Bucket::Community,
        tests: &[UrlTest::Contains("/community")],
    },
    BucketRule {
        bucket: Bucket::Legal,
        tests: &[
            UrlTest::Contains("/legal"),
            UrlTest::Contains("privacy"),
            UrlTest::Contains("popia"),
            UrlTest::Contains("cookies"),
        ],
    },
    BucketRule {
        bucket: Bucket::Flows,
        tests: &[UrlTest::Contains("/cleaning")],
    },
    BucketRule {
        bucket: Bucket::StaticAssets,
        tests: &[UrlTest::Contains("/_next/"), UrlTest::EndsWith(".woff2")],
    },
];
