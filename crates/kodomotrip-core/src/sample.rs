//! Built-in sample catalog (Tokyo area)

use crate::types::{AgeGroup, Category, CrowdLevel, EventPeriod, Place};
use chrono::NaiveDate;

fn period(start: (i32, u32, u32), end: (i32, u32, u32)) -> Option<EventPeriod> {
    Some(EventPeriod {
        start: NaiveDate::from_ymd_opt(start.0, start.1, start.2)?,
        end: NaiveDate::from_ymd_opt(end.0, end.1, end.2)?,
    })
}

pub(crate) fn places() -> Vec<Place> {
    vec![
        Place {
            id: "1".to_string(),
            name: "中央公園".to_string(),
            category: Category::Park,
            suitable_ages: vec![AgeGroup::Infant, AgeGroup::Toddler, AgeGroup::Preschool],
            crowd_level: CrowdLevel::Medium,
            has_parking: true,
            has_diaper_room: true,
            has_nursing_room: true,
            has_toilet: true,
            location: "東京都渋谷区".to_string(),
            image_url: "https://images.pexels.com/photos/1101970/pexels-photo-1101970.jpeg?auto=compress&cs=tinysrgb&w=800"
                .to_string(),
            event_period: None,
            description: "広い芝生エリアと遊具があり、家族連れに人気の公園です。授乳室やおむつ交換台も完備。".to_string(),
            open_hours: "24時間開放".to_string(),
            rating: 4.5,
        },
        Place {
            id: "2".to_string(),
            name: "キッズプラザ".to_string(),
            category: Category::Indoor,
            suitable_ages: vec![AgeGroup::Infant, AgeGroup::Toddler],
            crowd_level: CrowdLevel::Low,
            has_parking: true,
            has_diaper_room: true,
            has_nursing_room: true,
            has_toilet: true,
            location: "東京都新宿区".to_string(),
            image_url: "https://images.pexels.com/photos/8613325/pexels-photo-8613325.jpeg?auto=compress&cs=tinysrgb&w=800"
                .to_string(),
            event_period: None,
            description: "天候に関係なく楽しめる屋内施設。0-3歳向けの安全な遊具が充実。".to_string(),
            open_hours: "10:00-18:00".to_string(),
            rating: 4.8,
        },
        Place {
            id: "3".to_string(),
            name: "春祭り in 桜公園".to_string(),
            category: Category::Event,
            suitable_ages: vec![AgeGroup::Toddler, AgeGroup::Preschool],
            crowd_level: CrowdLevel::High,
            has_parking: false,
            has_diaper_room: true,
            has_nursing_room: false,
            has_toilet: true,
            location: "東京都目黒区".to_string(),
            image_url: "https://images.pexels.com/photos/1784578/pexels-photo-1784578.jpeg?auto=compress&cs=tinysrgb&w=800"
                .to_string(),
            event_period: period((2025, 4, 1), (2025, 4, 7)),
            description: "春の桜を楽しみながら子供向けワークショップや屋台が楽しめます。".to_string(),
            open_hours: "10:00-16:00".to_string(),
            rating: 4.2,
        },
        Place {
            id: "4".to_string(),
            name: "科学館".to_string(),
            category: Category::Museum,
            suitable_ages: vec![AgeGroup::Preschool],
            crowd_level: CrowdLevel::Medium,
            has_parking: true,
            has_diaper_room: true,
            has_nursing_room: true,
            has_toilet: true,
            location: "東京都港区".to_string(),
            image_url: "https://images.pexels.com/photos/256541/pexels-photo-256541.jpeg?auto=compress&cs=tinysrgb&w=800"
                .to_string(),
            event_period: None,
            description: "体験型の展示で科学を楽しく学べる施設。子供向けワークショップも開催。".to_string(),
            open_hours: "9:00-17:00".to_string(),
            rating: 4.6,
        },
        Place {
            id: "5".to_string(),
            name: "ファミリーモール".to_string(),
            category: Category::Shopping,
            suitable_ages: vec![AgeGroup::Infant, AgeGroup::Toddler, AgeGroup::Preschool],
            crowd_level: CrowdLevel::Low,
            has_parking: true,
            has_diaper_room: true,
            has_nursing_room: true,
            has_toilet: true,
            location: "東京都世田谷区".to_string(),
            image_url: "https://images.pexels.com/photos/1005417/pexels-photo-1005417.jpeg?auto=compress&cs=tinysrgb&w=800"
                .to_string(),
            event_period: None,
            description: "キッズエリアやベビー用品が充実したショッピングモール。レストランも家族向け。".to_string(),
            open_hours: "10:00-21:00".to_string(),
            rating: 4.3,
        },
        Place {
            id: "6".to_string(),
            name: "動物園".to_string(),
            category: Category::Park,
            suitable_ages: vec![AgeGroup::Toddler, AgeGroup::Preschool],
            crowd_level: CrowdLevel::High,
            has_parking: true,
            has_diaper_room: true,
            has_nursing_room: true,
            has_toilet: true,
            location: "東京都台東区".to_string(),
            image_url: "https://images.pexels.com/photos/1107717/pexels-photo-1107717.jpeg?auto=compress&cs=tinysrgb&w=800"
                .to_string(),
            event_period: None,
            description: "多くの動物と触れ合える人気スポット。ファミリー向けの設備も充実。".to_string(),
            open_hours: "9:30-17:00".to_string(),
            rating: 4.7,
        },
        Place {
            id: "7".to_string(),
            name: "夏祭り".to_string(),
            category: Category::Event,
            suitable_ages: vec![AgeGroup::Toddler, AgeGroup::Preschool],
            crowd_level: CrowdLevel::High,
            has_parking: false,
            has_diaper_room: true,
            has_nursing_room: false,
            has_toilet: true,
            location: "東京都品川区".to_string(),
            image_url: "https://images.pexels.com/photos/1190297/pexels-photo-1190297.jpeg?auto=compress&cs=tinysrgb&w=800"
                .to_string(),
            event_period: period((2025, 7, 15), (2025, 7, 17)),
            description: "夏の風物詩！子供向けゲームコーナーや屋台が楽しめる地域のお祭り。".to_string(),
            open_hours: "16:00-21:00".to_string(),
            rating: 4.4,
        },
        Place {
            id: "8".to_string(),
            name: "水族館".to_string(),
            category: Category::Indoor,
            suitable_ages: vec![AgeGroup::Infant, AgeGroup::Toddler, AgeGroup::Preschool],
            crowd_level: CrowdLevel::Medium,
            has_parking: true,
            has_diaper_room: true,
            has_nursing_room: true,
            has_toilet: true,
            location: "東京都江東区".to_string(),
            image_url: "https://images.pexels.com/photos/1371360/pexels-photo-1371360.jpeg?auto=compress&cs=tinysrgb&w=800"
                .to_string(),
            event_period: None,
            description: "美しい海の生き物たちと出会える癒しのスポット。ベビーカーでも回りやすい設計。".to_string(),
            open_hours: "10:00-18:00".to_string(),
            rating: 4.9,
        },
    ]
}
