//! Static itinerary data
//!
//! The day-by-day schedule of the trip. Day identifiers are what the day
//! selector targets; the first declared day is the one shown on launch.

use super::{ItineraryDay, Stop};

/// Headline shown at the top of the viewer
pub const TRIP_TITLE: &str = "名古屋 五日遊";

/// Static array of all itinerary days, in trip order
pub static DAYS: [ItineraryDay; 5] = [
    ItineraryDay {
        id: "day1",
        label: "Day 1",
        title: "抵達中部國際機場・名古屋站周邊",
        stops: &[
            Stop {
                time: "13:30",
                title: "抵達中部國際機場 (NGO)",
                detail: "名鐵 μSKY 直達名古屋站，約 28 分鐘",
            },
            Stop {
                time: "15:00",
                title: "飯店 Check-in",
                detail: "名古屋站前大和roynet飯店",
            },
            Stop {
                time: "16:30",
                title: "名古屋站・JR Gate Tower",
                detail: "",
            },
            Stop {
                time: "18:30",
                title: "晚餐：味噌豬排",
                detail: "矢場とん 名古屋站 Esca 店",
            },
        ],
    },
    ItineraryDay {
        id: "day2",
        label: "Day 2",
        title: "名古屋城・大須商店街",
        stops: &[
            Stop {
                time: "09:30",
                title: "名古屋城",
                detail: "本丸御殿需另排隊，建議先去",
            },
            Stop {
                time: "12:00",
                title: "午餐：鰻魚飯三吃",
                detail: "",
            },
            Stop {
                time: "14:00",
                title: "大須商店街",
                detail: "大須觀音 → 萬松寺通",
            },
            Stop {
                time: "19:00",
                title: "回飯店休息",
                detail: "",
            },
        ],
    },
    ItineraryDay {
        id: "day3",
        label: "Day 3",
        title: "換飯店・鶴舞公園",
        stops: &[
            Stop {
                time: "10:00",
                title: "Check-out，移動至鶴舞",
                detail: "行李可先寄放金星Neo飯店",
            },
            Stop {
                time: "11:00",
                title: "鶴舞公園",
                detail: "",
            },
            Stop {
                time: "14:00",
                title: "熱田神宮",
                detail: "地鐵名城線 神宮西站",
            },
            Stop {
                time: "16:00",
                title: "飯店 Check-in",
                detail: "金星Neo飯店",
            },
        ],
    },
    ItineraryDay {
        id: "day4",
        label: "Day 4",
        title: "榮・綠洲21",
        stops: &[
            Stop {
                time: "10:30",
                title: "Check-out，移動至榮",
                detail: "",
            },
            Stop {
                time: "11:30",
                title: "綠洲21・名古屋電視塔",
                detail: "",
            },
            Stop {
                time: "15:00",
                title: "飯店 Check-in",
                detail: "Dormy Inn PREMIUM Sakae",
            },
            Stop {
                time: "21:30",
                title: "宵夜醬油拉麵",
                detail: "飯店免費提供",
            },
        ],
    },
    ItineraryDay {
        id: "day5",
        label: "Day 5",
        title: "返程",
        stops: &[
            Stop {
                time: "11:00",
                title: "Check-out",
                detail: "",
            },
            Stop {
                time: "12:00",
                title: "名古屋站購買伴手禮",
                detail: "",
            },
            Stop {
                time: "15:30",
                title: "中部國際機場出發",
                detail: "",
            },
        ],
    },
];

/// Get a day by its identifier
///
/// # Returns
///
/// Returns `Some(&ItineraryDay)` if found, `None` otherwise
pub fn get_day_by_id(id: &str) -> Option<&'static ItineraryDay> {
    DAYS.iter().find(|day| day.id == id)
}

/// Get all itinerary days in trip order
pub fn all_days() -> &'static [ItineraryDay] {
    &DAYS
}
