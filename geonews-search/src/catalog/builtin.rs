//! Built-in catalog rows and per-country editorial outlets.
//!
//! Matching terms (aliases, local keywords) are lowercase and long enough
//! that substring matching does not fire inside ordinary words.

use super::LocationDescriptor;

pub(super) const INDIA_DOMAINS: &[&str] = &[
    "timesofindia.indiatimes.com",
    "hindustantimes.com",
    "thehindu.com",
    "indianexpress.com",
    "ndtv.com",
    "news18.com",
    "livemint.com",
    "scroll.in",
];

pub(super) const USA_DOMAINS: &[&str] = &[
    "nytimes.com",
    "washingtonpost.com",
    "apnews.com",
    "reuters.com",
    "npr.org",
    "cnn.com",
    "usatoday.com",
    "nbcnews.com",
];

pub(super) const UK_DOMAINS: &[&str] = &[
    "bbc.co.uk",
    "theguardian.com",
    "independent.co.uk",
    "telegraph.co.uk",
    "news.sky.com",
    "itv.com",
];

pub(super) const ENTRIES: &[LocationDescriptor] = &[
    LocationDescriptor {
        key: "mumbai",
        primary_name: "Mumbai",
        region: Some("Maharashtra"),
        country: "India",
        aliases: &["bombay"],
        local_keywords: &[
            "andheri",
            "bandra",
            "dadar",
            "colaba",
            "powai",
            "juhu",
            "worli",
            "marine drive",
            "local train",
            "bmc",
        ],
        nearby_place_names: &["Thane", "Navi Mumbai", "Pune"],
        preferred_source_domains: &["mid-day.com", "freepressjournal.in", "mumbailive.com"],
    },
    LocationDescriptor {
        key: "delhi",
        primary_name: "Delhi",
        region: Some("Delhi NCR"),
        country: "India",
        aliases: &["new delhi"],
        local_keywords: &[
            "connaught place",
            "chandni chowk",
            "dwarka",
            "rohini",
            "saket",
            "karol bagh",
            "yamuna",
            "delhi metro",
        ],
        nearby_place_names: &["Gurugram", "Noida", "Ghaziabad", "Faridabad"],
        preferred_source_domains: &["delhi.gov.in", "theprint.in"],
    },
    LocationDescriptor {
        key: "bengaluru",
        primary_name: "Bengaluru",
        region: Some("Karnataka"),
        country: "India",
        aliases: &["bangalore"],
        local_keywords: &[
            "koramangala",
            "indiranagar",
            "whitefield",
            "electronic city",
            "mg road",
            "hsr layout",
            "jayanagar",
            "silk board",
        ],
        nearby_place_names: &["Mysuru", "Hosur", "Tumakuru"],
        preferred_source_domains: &["deccanherald.com", "bangaloremirror.indiatimes.com"],
    },
    LocationDescriptor {
        key: "chennai",
        primary_name: "Chennai",
        region: Some("Tamil Nadu"),
        country: "India",
        aliases: &["madras"],
        local_keywords: &[
            "t nagar",
            "adyar",
            "velachery",
            "marina beach",
            "anna nagar",
            "tambaram",
            "guindy",
        ],
        nearby_place_names: &["Kanchipuram", "Chengalpattu", "Tiruvallur"],
        preferred_source_domains: &["dtnext.in", "newindianexpress.com"],
    },
    LocationDescriptor {
        key: "kolkata",
        primary_name: "Kolkata",
        region: Some("West Bengal"),
        country: "India",
        aliases: &["calcutta"],
        local_keywords: &[
            "salt lake",
            "park street",
            "esplanade",
            "new town",
            "gariahat",
            "dum dum",
            "hooghly",
        ],
        nearby_place_names: &["Howrah", "Barrackpore", "Durgapur"],
        preferred_source_domains: &["telegraphindia.com", "millenniumpost.in"],
    },
    LocationDescriptor {
        key: "hyderabad",
        primary_name: "Hyderabad",
        region: Some("Telangana"),
        country: "India",
        aliases: &["cyberabad"],
        local_keywords: &[
            "hitech city",
            "gachibowli",
            "banjara hills",
            "charminar",
            "madhapur",
            "kukatpally",
            "hussain sagar",
        ],
        nearby_place_names: &["Secunderabad", "Warangal", "Sangareddy"],
        preferred_source_domains: &["telanganatoday.com", "deccanchronicle.com"],
    },
    LocationDescriptor {
        key: "new york",
        primary_name: "New York",
        region: Some("New York State"),
        country: "USA",
        aliases: &["nyc", "manhattan"],
        local_keywords: &[
            "brooklyn",
            "queens",
            "bronx",
            "staten island",
            "harlem",
            "wall street",
            "subway",
            "mta",
        ],
        nearby_place_names: &["Jersey City", "Newark", "Yonkers"],
        preferred_source_domains: &["nydailynews.com", "gothamist.com", "ny1.com"],
    },
    LocationDescriptor {
        key: "san francisco",
        primary_name: "San Francisco",
        region: Some("California"),
        country: "USA",
        aliases: &["bay area"],
        local_keywords: &[
            "mission district",
            "tenderloin",
            "golden gate",
            "castro",
            "haight",
            "bart station",
        ],
        nearby_place_names: &["Oakland", "San Jose", "Berkeley"],
        preferred_source_domains: &["sfchronicle.com", "sfgate.com", "sfstandard.com"],
    },
    LocationDescriptor {
        key: "los angeles",
        primary_name: "Los Angeles",
        region: Some("California"),
        country: "USA",
        aliases: &["l.a."],
        local_keywords: &[
            "hollywood",
            "santa monica",
            "venice beach",
            "koreatown",
            "silver lake",
            "lapd",
            "dodgers",
        ],
        nearby_place_names: &["Long Beach", "Pasadena", "Burbank", "Anaheim"],
        preferred_source_domains: &["latimes.com", "laist.com"],
    },
    LocationDescriptor {
        key: "chicago",
        primary_name: "Chicago",
        region: Some("Illinois"),
        country: "USA",
        aliases: &["windy city"],
        local_keywords: &[
            "the loop",
            "wrigleyville",
            "south side",
            "hyde park",
            "river north",
            "o'hare",
        ],
        nearby_place_names: &["Evanston", "Oak Park", "Naperville"],
        preferred_source_domains: &["chicagotribune.com", "suntimes.com", "blockclubchicago.org"],
    },
    LocationDescriptor {
        key: "london",
        primary_name: "London",
        region: Some("England"),
        country: "UK",
        aliases: &["greater london"],
        local_keywords: &[
            "westminster",
            "camden",
            "hackney",
            "canary wharf",
            "southwark",
            "islington",
            "tfl",
            "the tube",
        ],
        nearby_place_names: &["Croydon", "Watford", "Reading"],
        preferred_source_domains: &["standard.co.uk", "mylondon.news"],
    },
    LocationDescriptor {
        key: "manchester",
        primary_name: "Manchester",
        region: Some("Greater Manchester"),
        country: "UK",
        aliases: &[],
        local_keywords: &[
            "salford",
            "ancoats",
            "deansgate",
            "northern quarter",
            "trafford",
            "metrolink",
        ],
        nearby_place_names: &["Stockport", "Bolton", "Oldham"],
        preferred_source_domains: &["manchestereveningnews.co.uk"],
    },
];
