//! Static accommodation data
//!
//! The hotels booked for the trip, in the order they are used. The list order
//! is the display order.

use super::{Accommodation, NearbyPlace};

/// Static array of all accommodations for the trip
pub static ACCOMMODATIONS: [Accommodation; 3] = [
    Accommodation {
        name: "名古屋站前大和roynet飯店",
        day: "Day 1, 2",
        address: "〒450-0002 愛知県名古屋市中村区名駅4-25-10",
        phone: "+81 52-581-4545",
        check_in: "15:00",
        check_out: "10:00",
        notes: "近名古屋站櫻通口，交通便利。**早餐很推薦**。",
        nearby: &[
            NearbyPlace {
                name: "7-Eleven (近飯店出口)",
                distance: "步行 1 分鐘",
                map_link: "https://maps.app.goo.gl/abcdefg1",
            },
            NearbyPlace {
                name: "Lawson (站前地下街)",
                distance: "步行 3 分鐘",
                map_link: "https://maps.app.goo.gl/abcdefg2",
            },
        ],
        map_url: "https://maps.app.goo.gl/S4p7xH7D3L3Vw",
    },
    Accommodation {
        name: "金星Neo飯店 (Hotel Kinjo Neo)",
        day: "Day 3",
        address: "〒460-0012 愛知県名古屋市中区千代田1-3-11",
        phone: "+81 52-251-2222",
        check_in: "16:00",
        check_out: "10:00",
        notes: "近地鐵鶴舞站。房間較小，但價格實惠，安靜。",
        nearby: &[NearbyPlace {
            name: "FamilyMart (鶴舞公園前)",
            distance: "步行 2 分鐘",
            map_link: "https://maps.app.goo.gl/abcdefg3",
        }],
        map_url: "https://maps.app.goo.gl/X9yWvY7D3L3Vw",
    },
    Accommodation {
        name: "Dormy Inn PREMIUM Sakae",
        day: "Day 4",
        address: "〒460-0008 愛知県名古屋市中区栄3-25-20",
        phone: "+81 52-243-5777",
        check_in: "15:00",
        check_out: "11:00",
        notes: "有天然溫泉大浴場、免費提供**宵夜醬油拉麵** (21:30~23:00)。",
        nearby: &[
            NearbyPlace {
                name: "7-Eleven (飯店旁)",
                distance: "步行 1 分鐘",
                map_link: "https://maps.app.goo.gl/abcdefg4",
            },
            NearbyPlace {
                name: "松坂屋百貨",
                distance: "步行 5 分鐘",
                map_link: "https://maps.app.goo.gl/abcdefg5",
            },
        ],
        map_url: "https://maps.app.goo.gl/D7eS9Y7D3L3Vw",
    },
];

/// Get all accommodations in display order
pub fn all_accommodations() -> &'static [Accommodation] {
    &ACCOMMODATIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accommodations_array_has_3_entries() {
        assert_eq!(all_accommodations().len(), 3);
    }

    #[test]
    fn test_accommodations_are_in_stay_order() {
        let days: Vec<&str> = all_accommodations().iter().map(|a| a.day).collect();
        assert_eq!(days, vec!["Day 1, 2", "Day 3", "Day 4"]);
    }

    #[test]
    fn test_each_accommodation_has_links() {
        for hotel in all_accommodations() {
            assert!(
                hotel.map_url.starts_with("https://"),
                "Hotel {} has invalid map url: {}",
                hotel.name,
                hotel.map_url
            );
            for place in hotel.nearby {
                assert!(
                    place.map_link.starts_with("https://"),
                    "Nearby place {} has invalid link",
                    place.name
                );
            }
        }
    }

    #[test]
    fn test_each_accommodation_has_at_least_one_nearby_place() {
        for hotel in all_accommodations() {
            assert!(!hotel.nearby.is_empty(), "Hotel {} has no nearby places", hotel.name);
        }
    }

    #[test]
    fn test_notes_keep_emphasis_markup() {
        assert!(ACCOMMODATIONS[0].notes.contains("**早餐很推薦**"));
    }
}
