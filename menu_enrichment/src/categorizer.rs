use entities::category::Category;

/// Anything that assigns a menu name a category. Implementations must be
/// deterministic and fall back to [`Category::Uncategorized`] instead of
/// failing.
pub trait MenuClassifier: Send + Sync {
    fn categorize(&self, name: &str) -> Category;
}

/// Declaration order matters: `탕수육` must be seen as a Chinese dish before
/// the soup rule's `탕` claims it, and likewise `맛탕` and `쌀국수`.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::EtcVegetarian,
        &["채식", "비건", "샐러드", "포케", "두부스테이크"],
    ),
    (
        Category::JapaneseSushi,
        &["초밥", "스시", "사시미", "물회", "회덮밥"],
    ),
    (
        Category::JapaneseRice,
        &["돈부리", "규동", "가츠동", "카츠동", "사케동", "텐동", "오야코동", "부타동"],
    ),
    (Category::JapaneseNoodle, &["우동", "라멘", "소바"]),
    (
        Category::ChineseNoodle,
        &["짜장면", "자장면", "짬뽕", "울면", "탄탄면"],
    ),
    (
        Category::ChineseRice,
        &["짜장밥", "짬뽕밥", "마파", "잡채밥", "유산슬", "중화덮밥"],
    ),
    (
        Category::ChineseFried,
        &["탕수육", "깐풍기", "유린기", "칠리새우", "깐쇼", "군만두", "팔보채"],
    ),
    (
        Category::WesternPasta,
        &["파스타", "스파게티", "그라탕", "라자냐", "리조또", "뇨끼"],
    ),
    (
        Category::WesternSteak,
        &["스테이크", "버거", "피자", "함박", "돈까스", "돈가스", "커틀릿", "샌드위치", "핫도그"],
    ),
    (
        Category::EtcSnack,
        &["떡볶이", "김밥", "순대", "튀김", "만두", "토스트", "맛탕", "어묵", "주먹밥"],
    ),
    (
        Category::EtcFusion,
        &["쌀국수", "카레", "커리", "타코", "부리또", "나시고렝", "팟타이", "분짜", "케밥"],
    ),
    (
        Category::KoreanNoodle,
        &["국수", "냉면", "라면", "수제비", "쫄면", "막국수"],
    ),
    (
        Category::KoreanBibimbap,
        &["비빔밥", "덮밥", "볶음밥", "컵밥", "쌈밥", "영양밥"],
    ),
    (Category::KoreanJorim, &["조림", "찜"]),
    (
        Category::KoreanSoup,
        &["찌개", "국밥", "탕", "국", "전골", "해장"],
    ),
    (
        Category::KoreanGrilled,
        &["구이", "볶음", "불고기", "제육", "갈비", "삼겹"],
    ),
];

/// First category in declaration order with a keyword contained in the name.
#[derive(Debug, Clone, Copy)]
pub struct KeywordCategorizer {
    rules: &'static [(Category, &'static [&'static str])],
}

impl Default for KeywordCategorizer {
    fn default() -> Self {
        Self {
            rules: CATEGORY_KEYWORDS,
        }
    }
}

impl MenuClassifier for KeywordCategorizer {
    fn categorize(&self, name: &str) -> Category {
        self.rules
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
            .map_or(Category::Uncategorized, |(category, _)| *category)
    }
}
