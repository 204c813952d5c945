// Ordering matters: substring matching means broader needles must come after the more specific
// platforms they would otherwise shadow (e.g. youtube's "googlevideo" before google's "google").

pub(crate) const HOST_RULES: &[(&[&str], &str)] = &[
    (
        &[
            "t.me",
            "telegram",
            "telegra.ph",
            "telesco.pe",
            "tdesktop",
            "tg.dev",
        ],
        "telegram",
    ),
    (
        &[
            "youtube",
            "youtu.be",
            "ytimg",
            "googlevideo",
            "yt3.ggpht",
            "youtubekids",
        ],
        "youtube",
    ),
    (&["netflix", "nflxvideo", "nflximg", "nflxext", "nflxso"], "netflix"),
    (&["instagram", "cdninstagram", "ig.me"], "instagram"),
    (&["whatsapp", "wa.me"], "whatsapp"),
    (&["facebook", "fbcdn", "fbsbx", "fb.com", "messenger.com"], "facebook"),
    (
        &[
            "tiktok",
            "tiktokcdn",
            "tiktokv",
            "byteoversea",
            "ibytedtos",
            "musical.ly",
        ],
        "tiktok",
    ),
    (&["twitter", "twimg", "api.x.com", "abs.x.com"], "twitter"),
    (&["discord", "discordapp"], "discord"),
    (&["spotify", "scdn.co", "spotifycdn"], "spotify"),
    (&["twitch", "ttvnw", "jtvnw"], "twitch"),
    (&["steampowered", "steamcommunity", "steamstatic", "steamcontent"], "steam"),
    (&["openai", "chatgpt", "oaistatic", "oaiusercontent"], "openai"),
    (
        &[
            "microsoft",
            "msftconnecttest",
            "windowsupdate",
            "live.com",
            "office",
            "skype",
            "bing.com",
        ],
        "microsoft",
    ),
    (&["apple", "icloud", "mzstatic", "itunes"], "apple"),
    (&["amazon", "aws", "cloudfront", "primevideo"], "amazon"),
    (
        &[
            "google",
            "gstatic",
            "gvt1",
            "gvt2",
            "ggpht",
            "android",
            "googleapis",
            "googleusercontent",
        ],
        "google",
    ),
    (&["cloudflare", "cf-ns", "workers.dev"], "cloudflare"),
    (
        &[
            "dns.",
            "doh.",
            "resolver",
            "one.one.one.one",
            "1dot1dot1dot1",
            "dns-query",
        ],
        "dns",
    ),
];

pub(crate) const IP_RULES: &[(&[&str], &str)] = &[
    (
        &[
            "91.108.4.0/22",
            "91.108.8.0/22",
            "91.108.12.0/22",
            "91.108.16.0/22",
            "91.108.20.0/22",
            "91.108.56.0/22",
            "95.161.64.0/20",
            "149.154.160.0/20",
            "2001:67c:4e8::/48",
            "2001:b28:f23d::/48",
            "2001:b28:f23f::/48",
        ],
        "telegram",
    ),
    (
        &[
            "1.1.1.1/32",
            "1.0.0.1/32",
            "8.8.8.8/32",
            "8.8.4.4/32",
            "9.9.9.9/32",
            "149.112.112.112/32",
            "208.67.222.222/32",
            "208.67.220.220/32",
            "2606:4700:4700::1111/128",
            "2606:4700:4700::1001/128",
            "2001:4860:4860::8888/128",
            "2001:4860:4860::8844/128",
        ],
        "dns",
    ),
    (&["157.240.0.0/16", "31.13.64.0/18", "2a03:2880::/32"], "facebook"),
    (&["13.107.0.0/16", "20.33.0.0/16", "40.96.0.0/12"], "microsoft"),
    (&["17.0.0.0/8"], "apple"),
    (
        &[
            "104.16.0.0/13",
            "172.64.0.0/13",
            "162.158.0.0/15",
            "2606:4700::/32",
        ],
        "cloudflare",
    ),
];
