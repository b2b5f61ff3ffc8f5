//! Open Extended Jungian Type Scales 1.2: 32 bipolar trait pairs.
//!
//! Source: <https://openpsychometrics.org/tests/OEJTS/> (Open Psychometrics).
//! Each pair is answered on a 1-5 scale, 1 leaning fully to the left trait and
//! 5 fully to the right trait.

use crate::types::{Dimension, DimensionMap, QuestionId};

use super::{text, QuestionPair};

pub const TOTAL_QUESTIONS: usize = 32;
pub const QUESTIONS_PER_DIMENSION: usize = 8;

pub const QUICK_TEST_TOTAL: usize = 8;
pub const QUICK_TEST_PER_DIMENSION: usize = 2;

/// Scoring order of the full bank. Adjacent entries are the pairs the
/// consistency check compares.
pub fn dimension_questions() -> DimensionMap<Vec<QuestionId>> {
    DimensionMap {
        ei: vec![3, 7, 11, 15, 19, 23, 27, 31],
        sn: vec![4, 8, 12, 16, 20, 24, 28, 32],
        tf: vec![2, 6, 10, 14, 18, 22, 26, 30],
        jp: vec![1, 5, 9, 13, 17, 21, 25, 29],
    }
}

/// The two most discriminating questions per dimension, in scoring order.
pub fn quick_test_question_ids() -> DimensionMap<Vec<QuestionId>> {
    DimensionMap {
        ei: vec![3, 15],
        sn: vec![24, 32],
        tf: vec![22, 14],
        jp: vec![9, 13],
    }
}

pub static QUESTIONS: [QuestionPair; TOTAL_QUESTIONS] = [
    // JP
    QuestionPair {
        id: 1,
        dimension: Dimension::JP,
        title: None,
        left_trait: text("Makes lists", "制定清单", "リストを作る", "목록을 만든다", "制定清單"),
        right_trait: text("Relies on memory", "依靠记忆", "記憶に頼る", "기억에 의존한다", "依靠記憶"),
    },
    QuestionPair {
        id: 5,
        dimension: Dimension::JP,
        title: None,
        left_trait: text("Keeps a clean room", "保持房间整洁", "部屋をきれいに保つ", "방을 깨끗이 유지한다", "保持房間整潔"),
        right_trait: text("Just puts stuff wherever", "随手放置东西", "物をどこにでも置く", "물건을 아무데나 둔다", "隨手放置東西"),
    },
    QuestionPair {
        id: 9,
        dimension: Dimension::JP,
        title: None,
        left_trait: text("Organized", "有条理", "整理整頓されている", "체계적이다", "有條理"),
        right_trait: text("Chaotic", "随性混乱", "混沌としている", "혼란스럽다", "隨性混亂"),
    },
    QuestionPair {
        id: 13,
        dimension: Dimension::JP,
        title: None,
        left_trait: text("Plans far ahead", "提前规划", "先の計画を立てる", "미리 계획한다", "提前規劃"),
        right_trait: text("Plans at the last minute", "最后一刻才计划", "直前に計画する", "마지막에 계획한다", "最後一刻才計劃"),
    },
    QuestionPair {
        id: 17,
        dimension: Dimension::JP,
        title: None,
        left_trait: text("Commits", "做出承诺", "約束を守る", "약속한다", "做出承諾"),
        right_trait: text("Keeps options open", "保留选择", "選択肢を残す", "선택지를 열어둔다", "保留選擇"),
    },
    QuestionPair {
        id: 21,
        dimension: Dimension::JP,
        title: None,
        left_trait: text("Gets work done right away", "立即完成工作", "すぐに仕事を終わらせる", "일을 바로 끝낸다", "立即完成工作"),
        right_trait: text("Procrastinates", "拖延", "先延ばしにする", "미룬다", "拖延"),
    },
    QuestionPair {
        id: 25,
        dimension: Dimension::JP,
        title: None,
        left_trait: text("Prepares", "提前准备", "準備する", "준비한다", "提前準備"),
        right_trait: text("Improvises", "即兴发挥", "即興で対応する", "즉흥적으로 한다", "即興發揮"),
    },
    QuestionPair {
        id: 29,
        dimension: Dimension::JP,
        title: None,
        left_trait: text("Works hard", "努力工作", "一生懸命働く", "열심히 일한다", "努力工作"),
        right_trait: text("Plays hard", "尽情玩乐", "思い切り遊ぶ", "열심히 논다", "盡情玩樂"),
    },

    // TF
    QuestionPair {
        id: 2,
        dimension: Dimension::TF,
        title: None,
        left_trait: text("Wants to believe", "愿意相信", "信じたい", "믿고 싶어한다", "願意相信"),
        right_trait: text("Skeptical", "持怀疑态度", "懐疑的", "회의적이다", "持懷疑態度"),
    },
    QuestionPair {
        id: 6,
        dimension: Dimension::TF,
        title: None,
        left_trait: text("Thinks \"robotic\" is an insult", "认为\"像机器人\"是侮辱", "「ロボットみたい」は侮辱だと思う", "\"로봇 같다\"는 말을 모욕으로 여긴다", "認為「像機器人」是侮辱"),
        right_trait: text("Strives to have a mechanical mind", "追求机械般的思维", "機械的な思考を目指す", "기계적인 사고를 추구한다", "追求機械般的思維"),
    },
    QuestionPair {
        id: 10,
        dimension: Dimension::TF,
        title: None,
        left_trait: text("Easily hurt", "容易受伤", "傷つきやすい", "쉽게 상처받는다", "容易受傷"),
        right_trait: text("Thick-skinned", "脸皮厚", "図太い", "둔감하다", "臉皮厚"),
    },
    QuestionPair {
        id: 14,
        dimension: Dimension::TF,
        title: None,
        left_trait: text("Wants people's love", "渴望他人的爱", "人々の愛を求める", "사람들의 사랑을 원한다", "渴望他人的愛"),
        right_trait: text("Wants people's respect", "渴望他人的尊重", "人々の尊敬を求める", "사람들의 존경을 원한다", "渴望他人的尊重"),
    },
    QuestionPair {
        id: 18,
        dimension: Dimension::TF,
        title: None,
        left_trait: text("Wants to be good at fixing people", "想擅长帮助他人", "人を助けることが得意になりたい", "사람을 돕는 것을 잘하고 싶다", "想擅長幫助他人"),
        right_trait: text("Wants to be good at fixing things", "想擅长修理事物", "物を修理することが得意になりたい", "물건을 고치는 것을 잘하고 싶다", "想擅長修理事物"),
    },
    QuestionPair {
        id: 22,
        dimension: Dimension::TF,
        title: None,
        left_trait: text("Follows the heart", "跟随内心", "心に従う", "마음을 따른다", "跟隨內心"),
        right_trait: text("Follows the head", "跟随理性", "頭に従う", "이성을 따른다", "跟隨理性"),
    },
    QuestionPair {
        id: 26,
        dimension: Dimension::TF,
        title: None,
        left_trait: text("Bases morality on compassion", "道德基于同情", "道徳は思いやりに基づく", "도덕은 동정심에 기반한다", "道德基於同情"),
        right_trait: text("Bases morality on justice", "道德基于正义", "道徳は正義に基づく", "도덕은 정의에 기반한다", "道德基於正義"),
    },
    QuestionPair {
        id: 30,
        dimension: Dimension::TF,
        title: None,
        left_trait: text("Values emotions", "重视情感", "感情を大切にする", "감정을 중시한다", "重視情感"),
        right_trait: text("Uncomfortable with emotions", "对情感感到不自在", "感情に居心地の悪さを感じる", "감정이 불편하다", "對情感感到不自在"),
    },

    // EI
    QuestionPair {
        id: 3,
        dimension: Dimension::EI,
        title: None,
        left_trait: text("Bored by time alone", "独处时感到无聊", "一人の時間は退屈", "혼자 있으면 지루하다", "獨處時感到無聊"),
        right_trait: text("Needs time alone", "需要独处时间", "一人の時間が必要", "혼자만의 시간이 필요하다", "需要獨處時間"),
    },
    QuestionPair {
        id: 7,
        dimension: Dimension::EI,
        title: None,
        left_trait: text("Energetic", "精力充沛", "エネルギッシュ", "활기차다", "精力充沛"),
        right_trait: text("Mellow", "平静温和", "穏やか", "차분하다", "平靜溫和"),
    },
    QuestionPair {
        id: 11,
        dimension: Dimension::EI,
        title: None,
        left_trait: text("Works best in groups", "在团队中表现最佳", "グループで働くのが得意", "팀에서 일할 때 최고다", "在團隊中表現最佳"),
        right_trait: text("Works best alone", "独自工作表现最佳", "一人で働くのが得意", "혼자 일할 때 최고다", "獨自工作表現最佳"),
    },
    QuestionPair {
        id: 15,
        dimension: Dimension::EI,
        title: None,
        left_trait: text("Gets fired up by parties", "因聚会而兴奋", "パーティーで盛り上がる", "파티에서 흥분한다", "因聚會而興奮"),
        right_trait: text("Gets worn out by parties", "因聚会而疲惫", "パーティーで疲れる", "파티에서 지친다", "因聚會而疲憊"),
    },
    QuestionPair {
        id: 19,
        dimension: Dimension::EI,
        title: None,
        left_trait: text("Talks more", "话比较多", "よく話す", "말을 많이 한다", "話比較多"),
        right_trait: text("Listens more", "更善于倾听", "よく聞く", "듣는 편이다", "更善於傾聽"),
    },
    QuestionPair {
        id: 23,
        dimension: Dimension::EI,
        title: None,
        left_trait: text("Goes out on the town", "喜欢外出活动", "外出を楽しむ", "외출을 즐긴다", "喜歡外出活動"),
        right_trait: text("Stays at home", "喜欢待在家里", "家にいるのが好き", "집에 있는 것을 좋아한다", "喜歡待在家裡"),
    },
    QuestionPair {
        id: 27,
        dimension: Dimension::EI,
        title: None,
        left_trait: text("Yelling comes naturally", "自然而然大声说话", "大声で話すのが自然", "큰 소리가 자연스럽다", "自然而然大聲說話"),
        right_trait: text("Finds it difficult to yell loudly", "很难大声喊叫", "大声を出すのが苦手", "큰 소리를 내기 어렵다", "很難大聲喊叫"),
    },
    QuestionPair {
        id: 31,
        dimension: Dimension::EI,
        title: None,
        left_trait: text("Likes to perform", "喜欢表演", "パフォーマンスが好き", "공연하는 것을 좋아한다", "喜歡表演"),
        right_trait: text("Avoids public speaking", "避免公开演讲", "人前で話すのを避ける", "대중 앞에서 말하기를 피한다", "避免公開演講"),
    },

    // SN
    QuestionPair {
        id: 4,
        dimension: Dimension::SN,
        title: None,
        left_trait: text("Accepts things as they are", "接受事物的本来面目", "あるがままを受け入れる", "있는 그대로 받아들인다", "接受事物的本來面目"),
        right_trait: text("Unsatisfied with the way things are", "对现状不满足", "現状に満足しない", "현 상황에 만족하지 않는다", "對現狀不滿足"),
    },
    QuestionPair {
        id: 8,
        dimension: Dimension::SN,
        title: None,
        left_trait: text("Prefers multiple choice test", "喜欢选择题", "選択問題を好む", "객관식을 선호한다", "喜歡選擇題"),
        right_trait: text("Prefers essay answers", "喜欢论述题", "論述問題を好む", "서술형을 선호한다", "喜歡論述題"),
    },
    QuestionPair {
        id: 12,
        dimension: Dimension::SN,
        title: None,
        left_trait: text("Focused on the past", "关注过去", "過去に焦点を当てる", "과거에 집중한다", "關注過去"),
        right_trait: text("Focused on the future", "关注未来", "未来に焦点を当てる", "미래에 집중한다", "關注未來"),
    },
    QuestionPair {
        id: 16,
        dimension: Dimension::SN,
        title: None,
        left_trait: text("Fits in", "融入群体", "周りに溶け込む", "어울린다", "融入群體"),
        right_trait: text("Stands out", "与众不同", "目立つ", "눈에 띈다", "與眾不同"),
    },
    QuestionPair {
        id: 20,
        dimension: Dimension::SN,
        title: None,
        left_trait: text("Describes what happened", "描述发生了什么", "何が起きたかを説明する", "무슨 일이 있었는지 설명한다", "描述發生了什麼"),
        right_trait: text("Describes what it meant", "描述这意味着什么", "それが何を意味するかを説明する", "그것이 무엇을 의미하는지 설명한다", "描述這意味著什麼"),
    },
    QuestionPair {
        id: 24,
        dimension: Dimension::SN,
        title: None,
        left_trait: text("Wants the details", "想要细节", "詳細を求める", "세부사항을 원한다", "想要細節"),
        right_trait: text("Wants the big picture", "想要大局观", "全体像を求める", "큰 그림을 원한다", "想要大局觀"),
    },
    QuestionPair {
        id: 28,
        dimension: Dimension::SN,
        title: None,
        left_trait: text("Empirical", "经验主义", "経験主義的", "경험주의적이다", "經驗主義"),
        right_trait: text("Theoretical", "理论主义", "理論的", "이론적이다", "理論主義"),
    },
    QuestionPair {
        id: 32,
        dimension: Dimension::SN,
        title: None,
        left_trait: text("Likes to know \"who/what/when\"", "想知道\"谁/什么/何时\"", "「誰が/何を/いつ」を知りたい", "\"누가/무엇을/언제\"를 알고 싶다", "想知道「誰/什麼/何時」"),
        right_trait: text("Likes to know \"why\"", "想知道\"为什么\"", "「なぜ」を知りたい", "\"왜\"를 알고 싶다", "想知道「為什麼」"),
    },
];
