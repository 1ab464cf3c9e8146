//! Curated allow-lists applied query-side before any user-facing filtering.
//!
//! Only projects from these developers and areas are eligible to appear on
//! the premium listing surfaces at all. Maintained by the sales team;
//! entries mirror the remote table's values verbatim, stray whitespace and
//! near-duplicates included, because the membership predicate matches
//! exactly.

/// Developers eligible for the premium catalog.
pub fn developers() -> Vec<String> {
    [
        "Emaar",
        "Nakheel",
        "DAMAC",
        "Dubai Properties",
        "Meraas",
        "Sobha",
        "Binghatti",
        "Azizi",
        "Danube",
        "Select Group",
        "Arada",
        "Omniyat",
        "Al Barari",
        "Time Properties",
        "Falconcity of Wonders",
        "MAG",
        "Al Habtoor Group",
        "Dubai Holding",
        "RAK Properties",
        "Tiger Group",
        "Samana",
        "Nshama Group",
        "Al Futtaim Real Estate Group",
        "ALDAR",
        "Ellington",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Areas eligible for the premium catalog.
pub fn areas() -> Vec<String> {
    [
        "Abu Dhabi",
        "Ajmal Makan City - Sharjah Waterfront",
        "Ajman",
        "Al Arqoub, Ras Al Khaimah",
        "Al Barari",
        "Al Barsha 1",
        "Al Barsha 2",
        "Al Barsha 3",
        "Al Barsha South",
        "Al Faqa, Abu Dhabi",
        "Al Furjan",
        "Al Habtoor City",
        "Al Hamra Village, Ras al Khaimah",
        "Al Hamra Village, Ras Al Khaimah",
        " Al Hamriyah, Sharjah",
        "Al Hamriyah, Sharjah",
        "Aljada Sharjah",
        "Aljada, Sharjah ",
        "Al Jaddaf",
        "Al Jazeera, Ras Al Khaimah",
        "Al Jurf",
        "Al Jurf, Abu Dhabi",
        "Aljurf Gardens",
        "Al Khail Heights",
        "Al Khalidiya, Sharjah",
        "Al Kifaf Area",
        "Al Mamzar, Sharjah",
        "Al Marina, Abu Dhabi",
        "Al Marjan Island, Ras Al Khaimah",
        "Al Maryah Island, Abu Dhabi",
        "Al Raha Beach, Abu Dhabi",
        "Al Rashidiya 1, Ajman",
        "Al Reem Island, Abu Dhabi",
        "Al Rifaah, Sharjah",
        "Al Safa",
        "Al Satwa",
        "Al Seef, Abu Dhabi",
        " Al Shamkha, Abu Dhabi",
        "Al Sufouh 1",
        "Al Sufouh 2",
        "Al Suyoh Suburb, Sharjah",
        "Al Tay, Sharjah",
        "Al Wadi desert, Ras Al Khaimah",
        "Al Warsan",
        "Al Wasl (City Walk)",
        "Al Zahia, Sharjah",
        "Al Zorah, Ajman ",
        "Arabian Gulf",
        "Arabian Ranches",
        "Arabian Ranches 2",
        "Arabian Ranches 3",
        "Arjan",
        "Barsha South",
        "Bluewaters Island",
        "Bukadra",
        "Business Bay",
        "City of Arabia",
        "Complex (Dubailand)",
        "Creekside",
        "Culture Village",
        "Damac Hills",
        "Damac Hills 2",
        "Damac Lagoons",
        "Discovery Gardens",
        "District One",
        "Downtown Dubai",
        "Downtown Jebel Ali",
        "Downtown Umm Al Quwain, Umm Al Quwain",
        "Dubai Creek Harbour",
        "Dubai Design District ",
        "Dubai Festival City",
        "Dubai Golf City",
        "Dubai Harbour",
        "Dubai Healthcare City",
        "Dubai Hills",
        "Dubai Industrial City",
        "Dubai International Financial Centre (DIFC)",
        "Dubai Internet City",
        "Dubai Investment Park",
        "Dubai Investment Park 2",
        "Dubai Islands",
        "Dubailand",
        "Dubai Land",
        "Dubai Land Residence Complex (DLRC)",
        "Dubai Marina",
        "Dubai Maritime City",
        "Dubai Media City",
        "Dubai Production City",
        "Dubai Science Park",
        "Dubai Silicon Oasis",
        "Dubai South",
        "Dubai Sports City",
        "Dubai Studio City",
        "Dubai Water Canal",
        "Dubai Waterfront",
        "Emaar Beachfront",
        "Emaar South",
        "Emirates Hills",
        "Expo City Dubai",
        "Expo Living",
        "Fahid Island, Abu Dhabi",
        "Financial Centre",
        "Ghantoot",
        "Grand Polo Club and Resort",
        "Greenwood",
        "Hayat Islands, Ras Al Khaimah",
        "Hudayriyat Island",
        "International City",
        "International City Phase 2",
        "Jebel Ali",
        "Jumeirah",
        "Jumeirah 2",
        "Jumeirah Beach Residence (JBR)",
        "Jumeirah Garden City",
        "Jumeirah Golf Estates",
        "Jumeirah Heights",
        "Jumeirah Islands",
        "Jumeirah Lake Towers (JLT)",
        "Jumeirah Park",
        "Jumeirah Village Circle (JVC)",
        "Jumeirah Village Triangle (JVT)",
        "Khalifa City, Abu Dhabi",
        "La Mer",
        "Legends",
        "Liwan",
        "Madinat Al Mataar",
        "Madinat Jumeirah Living",
        "Madinat Zayed, Abu Dhabi",
        "Majan",
        "Maryam Island, Sharjah",
        "Masdar City, Abu Dhabi",
        "Mesk District",
        "Meydan City",
        "Mina Al Arab, Ras Al Khaimah",
        "Mina Rashid",
        "Mirdif Hills",
        "Mirdif Tulip",
        "Mohammed Bin Rashid City (MBR)",
        "Motor City",
        "Mudon",
        "Muwaileh Commercial, Sharjah",
        "Nad Al Sheba",
        "Nad Al Sheba 1",
        "Nshama",
        "Old Town",
        "Palm Jebel Ali",
        "Palm Jumeirah",
        "Park Gate Residences",
        "Raha Island, Ras Al Khaimah",
        "Ramhan Island",
        "Ras Al Khaimah",
        "Ras Al Khor",
        "Rashid Yachts and Marina",
        "Reem",
        "Remraam",
        "Riverside",
        "Saadiyat Island, Abu Dhabi",
        "Saih Shuaib 2",
        "Sharjah",
        "Sharjah Waterfront City",
        "Sheikh Zayed Road",
        "Sobha Hartland",
        "Sobha Hartland II",
        "SOON",
        "The Greens",
        "The Lakes",
        "The Meadows",
        "The Oasis by Emaar",
        "The Springs",
        "The Sustainable City",
        "The Valley",
        "The Views",
        "The Villa",
        "The World Islands",
        "Tilal Al Ghaf",
        "Tilal, Sharjah",
        "Town Square",
        "Trade Centre 2",
        "Trade Centre First",
        "Umm Al Quwain",
        "Umm Suqeim 2",
        "Uptown Dubai",
        "Villanova",
        "Wadi Al Safa 4",
        "Wadi Al Safa 5",
        "Wadi Al Safa 7",
        "Warsan 4",
        "Wasl Gate",
        "YAS Island",
        "Yas Island, Abu Dhabi",
        "Za'abeel 1",
        "Zayed City, Abu Dhabi",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
