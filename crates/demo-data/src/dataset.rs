//! Seed craftsmen and reviews.
//!
//! These records mirror what the hosted mock API is seeded with, so the
//! fallback mode and the remote mode present the same catalogue.

/// A craftsman profile in the seed catalogue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CraftsmanRecord {
    /// Opaque record id, matching the remote service's sequential ids.
    pub id: &'static str,
    /// Public display name.
    pub display_name: &'static str,
    /// Free-text self description.
    pub description: &'static str,
    /// Profile image reference.
    pub profile_image_url: &'static str,
    /// Prefecture of the service area.
    pub prefecture: &'static str,
    /// City of the service area.
    pub city: &'static str,
    /// Service category label.
    pub category: &'static str,
    /// Lower bound of the quoted price range, in yen.
    pub price_min: u32,
    /// Upper bound of the quoted price range, in yen.
    pub price_max: u32,
    /// Aggregate rating, 0.0 to 5.0.
    pub rating_avg: f64,
    /// Number of reviews behind the aggregate rating.
    pub review_count: u32,
    /// Years of professional experience.
    pub experience_years: u32,
    /// Comma-separated qualification list.
    pub qualifications: &'static str,
}

/// A customer review in the seed catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewRecord {
    /// Opaque record id.
    pub id: &'static str,
    /// Id of the reviewed craftsman.
    pub craftsman_id: &'static str,
    /// Reviewer display name.
    pub customer_name: &'static str,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Free-text comment.
    pub comment: &'static str,
    /// Review date in `YYYY-MM-DD` form.
    pub created_at: &'static str,
}

/// The seed craftsman catalogue.
#[must_use]
pub fn craftsmen() -> &'static [CraftsmanRecord] {
    CRAFTSMEN
}

/// The seed review list.
#[must_use]
pub fn reviews() -> &'static [ReviewRecord] {
    REVIEWS
}

static CRAFTSMEN: &[CraftsmanRecord] = &[
    CraftsmanRecord {
        id: "1",
        display_name: "山田エアコンサービス",
        description: "エアコン取り付け専門で15年の経験があります。丁寧な作業と確実な施工を心がけています。お見積もりは無料ですので、お気軽にご相談ください。",
        profile_image_url: "https://i.pravatar.cc/150?img=1",
        prefecture: "東京都",
        city: "渋谷区",
        category: "エアコン",
        price_min: 8000,
        price_max: 15000,
        rating_avg: 4.8,
        review_count: 32,
        experience_years: 15,
        qualifications: "第二種電気工事士,冷媒フロン類取扱技術者",
    },
    CraftsmanRecord {
        id: "2",
        display_name: "佐藤設備工業",
        description: "水回りのトラブルならお任せください。水漏れ、つまり、トイレ修理など迅速に対応いたします。24時間対応可能です。",
        profile_image_url: "https://i.pravatar.cc/150?img=3",
        prefecture: "東京都",
        city: "新宿区",
        category: "水回り",
        price_min: 5000,
        price_max: 20000,
        rating_avg: 4.6,
        review_count: 48,
        experience_years: 20,
        qualifications: "給水装置工事主任技術者,排水設備工事責任技術者",
    },
    CraftsmanRecord {
        id: "3",
        display_name: "鈴木電気工事",
        description: "一般家庭から店舗まで、電気工事全般を承ります。コンセント増設、照明器具の取り付け、ブレーカー交換など、お気軽にご相談ください。",
        profile_image_url: "https://i.pravatar.cc/150?img=5",
        prefecture: "東京都",
        city: "世田谷区",
        category: "電気",
        price_min: 6000,
        price_max: 25000,
        rating_avg: 4.9,
        review_count: 56,
        experience_years: 18,
        qualifications: "第一種電気工事士,消防設備士",
    },
    CraftsmanRecord {
        id: "4",
        display_name: "田中内装リフォーム",
        description: "壁紙の張替え、フローリング補修、網戸の張替えなど、内装工事を幅広く対応しています。きれいな仕上がりをお約束します。",
        profile_image_url: "https://i.pravatar.cc/150?img=7",
        prefecture: "東京都",
        city: "目黒区",
        category: "内装",
        price_min: 10000,
        price_max: 50000,
        rating_avg: 4.7,
        review_count: 28,
        experience_years: 12,
        qualifications: "内装仕上げ施工技能士,建築施工管理技士",
    },
    CraftsmanRecord {
        id: "5",
        display_name: "高橋空調設備",
        description: "業務用から家庭用まで、エアコンの取り付け・取り外しを行っています。引っ越しシーズンも迅速対応いたします。",
        profile_image_url: "https://i.pravatar.cc/150?img=8",
        prefecture: "神奈川県",
        city: "横浜市",
        category: "エアコン",
        price_min: 7000,
        price_max: 18000,
        rating_avg: 4.5,
        review_count: 41,
        experience_years: 10,
        qualifications: "第二種電気工事士",
    },
    CraftsmanRecord {
        id: "6",
        display_name: "伊藤水道サービス",
        description: "横浜・川崎エリアで水回りのトラブルに対応しています。緊急時も30分以内に駆けつけます。",
        profile_image_url: "https://i.pravatar.cc/150?img=11",
        prefecture: "神奈川県",
        city: "川崎市",
        category: "水回り",
        price_min: 4000,
        price_max: 15000,
        rating_avg: 4.4,
        review_count: 63,
        experience_years: 8,
        qualifications: "給水装置工事主任技術者",
    },
    CraftsmanRecord {
        id: "7",
        display_name: "渡辺電設",
        description: "埼玉県全域で電気工事を承ります。住宅の電気配線からLED照明への交換まで、幅広く対応いたします。",
        profile_image_url: "https://i.pravatar.cc/150?img=12",
        prefecture: "埼玉県",
        city: "さいたま市",
        category: "電気",
        price_min: 5000,
        price_max: 20000,
        rating_avg: 4.6,
        review_count: 37,
        experience_years: 14,
        qualifications: "第一種電気工事士,認定電気工事従事者",
    },
    CraftsmanRecord {
        id: "8",
        display_name: "中村リペアサービス",
        description: "千葉県で内装リフォームを専門に行っています。小さな補修から大規模リフォームまでお任せください。",
        profile_image_url: "https://i.pravatar.cc/150?img=14",
        prefecture: "千葉県",
        city: "千葉市",
        category: "内装",
        price_min: 8000,
        price_max: 40000,
        rating_avg: 4.8,
        review_count: 24,
        experience_years: 16,
        qualifications: "内装仕上げ施工技能士",
    },
];

static REVIEWS: &[ReviewRecord] = &[
    ReviewRecord {
        id: "1",
        craftsman_id: "1",
        customer_name: "田中さん",
        rating: 5,
        comment: "とても丁寧に作業していただきました。説明もわかりやすく、安心してお任せできました。また機会があればお願いしたいです。",
        created_at: "2026-02-15",
    },
    ReviewRecord {
        id: "2",
        craftsman_id: "1",
        customer_name: "佐藤さん",
        rating: 5,
        comment: "引っ越しで急ぎでしたが、すぐに対応していただけました。仕上がりも完璧です。",
        created_at: "2026-02-10",
    },
    ReviewRecord {
        id: "3",
        craftsman_id: "1",
        customer_name: "鈴木さん",
        rating: 4,
        comment: "作業は問題なかったですが、少し時間がかかりました。でも仕上がりは満足です。",
        created_at: "2026-01-28",
    },
    ReviewRecord {
        id: "4",
        craftsman_id: "2",
        customer_name: "高橋さん",
        rating: 5,
        comment: "深夜の水漏れにも関わらず、すぐに来ていただけました。本当に助かりました。",
        created_at: "2026-02-18",
    },
    ReviewRecord {
        id: "5",
        craftsman_id: "2",
        customer_name: "伊藤さん",
        rating: 4,
        comment: "トイレの修理をお願いしました。手際よく作業していただき、すぐに直りました。",
        created_at: "2026-02-05",
    },
    ReviewRecord {
        id: "6",
        craftsman_id: "3",
        customer_name: "渡辺さん",
        rating: 5,
        comment: "コンセントの増設をお願いしました。配線も綺麗に隠していただき、見た目もスッキリです。",
        created_at: "2026-02-12",
    },
    ReviewRecord {
        id: "7",
        craftsman_id: "3",
        customer_name: "中村さん",
        rating: 5,
        comment: "照明器具の取り付けをお願いしました。プロの仕事だと感心しました。",
        created_at: "2026-01-30",
    },
    ReviewRecord {
        id: "8",
        craftsman_id: "4",
        customer_name: "小林さん",
        rating: 5,
        comment: "壁紙の張替えをお願いしました。仕上がりがとても綺麗で大満足です。",
        created_at: "2026-02-08",
    },
    ReviewRecord {
        id: "9",
        craftsman_id: "4",
        customer_name: "加藤さん",
        rating: 4,
        comment: "網戸の張替えを依頼しました。丁寧な作業で新品同様になりました。",
        created_at: "2026-01-25",
    },
    ReviewRecord {
        id: "10",
        craftsman_id: "5",
        customer_name: "吉田さん",
        rating: 5,
        comment: "エアコンの取り外しと取り付けをお願いしました。スピーディーで助かりました。",
        created_at: "2026-02-14",
    },
    ReviewRecord {
        id: "11",
        craftsman_id: "6",
        customer_name: "山本さん",
        rating: 4,
        comment: "排水管の詰まりを直していただきました。原因も説明してくれて勉強になりました。",
        created_at: "2026-02-11",
    },
    ReviewRecord {
        id: "12",
        craftsman_id: "7",
        customer_name: "松本さん",
        rating: 5,
        comment: "ブレーカーの交換をお願いしました。安全面の説明も丁寧でした。",
        created_at: "2026-02-09",
    },
    ReviewRecord {
        id: "13",
        craftsman_id: "8",
        customer_name: "井上さん",
        rating: 5,
        comment: "フローリングの補修をお願いしました。傷がわからなくなるほど綺麗に直していただきました。",
        created_at: "2026-02-16",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalogue_has_expected_sizes() {
        assert_eq!(craftsmen().len(), 8);
        assert_eq!(reviews().len(), 13);
    }

    #[test]
    fn craftsman_records_are_internally_consistent() {
        let mut seen = HashSet::new();
        for record in craftsmen() {
            assert!(seen.insert(record.id), "duplicate craftsman id {}", record.id);
            assert!(record.price_min <= record.price_max, "{}", record.id);
            assert!(
                (0.0..=5.0).contains(&record.rating_avg),
                "rating out of range for {}",
                record.id
            );
            assert!(!record.display_name.is_empty());
        }
    }

    #[test]
    fn reviews_reference_seeded_craftsmen() {
        let ids: HashSet<&str> = craftsmen().iter().map(|c| c.id).collect();
        for review in reviews() {
            assert!(
                ids.contains(review.craftsman_id),
                "review {} points at unknown craftsman {}",
                review.id,
                review.craftsman_id
            );
            assert!((1..=5).contains(&review.rating));
        }
    }
}
