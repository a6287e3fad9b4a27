use serde::{Deserialize, Serialize};

/// Semantic menu category. Labels use the `main>sub` form; the fallback
/// has no sub category.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "한식>찌개/국밥")]
    KoreanSoup,
    #[serde(rename = "한식>비빔밥/덮밥")]
    KoreanBibimbap,
    #[serde(rename = "한식>구이/볶음")]
    KoreanGrilled,
    #[serde(rename = "한식>면류")]
    KoreanNoodle,
    #[serde(rename = "한식>조림")]
    KoreanJorim,
    #[serde(rename = "양식>파스타/그라탕")]
    WesternPasta,
    #[serde(rename = "양식>스테이크/패스트푸드")]
    WesternSteak,
    #[serde(rename = "중식>면류")]
    ChineseNoodle,
    #[serde(rename = "중식>밥류")]
    ChineseRice,
    #[serde(rename = "중식>튀김/요리")]
    ChineseFried,
    #[serde(rename = "일식>초밥/회")]
    JapaneseSushi,
    #[serde(rename = "일식>덮밥")]
    JapaneseRice,
    #[serde(rename = "일식>면류")]
    JapaneseNoodle,
    #[serde(rename = "기타>퓨전")]
    EtcFusion,
    #[serde(rename = "기타>간식/분식")]
    EtcSnack,
    #[serde(rename = "기타>채식/건강식")]
    EtcVegetarian,
    #[serde(rename = "기타")]
    Uncategorized,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::KoreanSoup => "한식>찌개/국밥",
            Category::KoreanBibimbap => "한식>비빔밥/덮밥",
            Category::KoreanGrilled => "한식>구이/볶음",
            Category::KoreanNoodle => "한식>면류",
            Category::KoreanJorim => "한식>조림",
            Category::WesternPasta => "양식>파스타/그라탕",
            Category::WesternSteak => "양식>스테이크/패스트푸드",
            Category::ChineseNoodle => "중식>면류",
            Category::ChineseRice => "중식>밥류",
            Category::ChineseFried => "중식>튀김/요리",
            Category::JapaneseSushi => "일식>초밥/회",
            Category::JapaneseRice => "일식>덮밥",
            Category::JapaneseNoodle => "일식>면류",
            Category::EtcFusion => "기타>퓨전",
            Category::EtcSnack => "기타>간식/분식",
            Category::EtcVegetarian => "기타>채식/건강식",
            Category::Uncategorized => "기타",
        }
    }

    pub fn main_category(&self) -> &'static str {
        self.label()
            .split_once('>')
            .map_or(self.label(), |(main, _)| main)
    }

    pub fn sub_category(&self) -> Option<&'static str> {
        self.label().split_once('>').map(|(_, sub)| sub)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
