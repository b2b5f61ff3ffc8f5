//! PurrJung: a 16-question temperament test for cats.
//!
//! Same four dimensions as the human bank, reinterpreted for feline behaviour:
//! EI social/solitary, SN routine/novelty, TF independent/bonded,
//! JP structured/spontaneous. Note that TF puts `T` on the left pole.

use crate::types::{Dimension, DimensionMap, QuestionId};

use super::{text, QuestionPair};

pub const TOTAL_QUESTIONS: usize = 16;
pub const QUESTIONS_PER_DIMENSION: usize = 4;

pub fn dimension_questions() -> DimensionMap<Vec<QuestionId>> {
    DimensionMap {
        ei: vec![1, 2, 3, 4],
        sn: vec![5, 6, 7, 8],
        tf: vec![9, 10, 11, 12],
        jp: vec![13, 14, 15, 16],
    }
}

pub static QUESTIONS: [QuestionPair; TOTAL_QUESTIONS] = [
    // EI
    QuestionPair {
        id: 1,
        dimension: Dimension::EI,
        title: Some(text("When visitors arrive at home, your cat typically...", "当有访客到家时，你的猫通常会...", "来客があった時、あなたの猫は通常...", "손님이 집에 왔을 때, 당신의 고양이는 보통...", "當有訪客到家時，你的貓通常會...")),
        left_trait: text("Approaches to investigate or greet", "上前查看或迎接", "調べに行く、または挨拶する", "조사하거나 인사하러 다가간다", "上前查看或迎接"),
        right_trait: text("Retreats to a hiding spot", "躲到隐蔽处", "隠れ場所に逃げる", "숨는 곳으로 피한다", "躲到隱蔽處"),
    },
    QuestionPair {
        id: 2,
        dimension: Dimension::EI,
        title: Some(text("In a household with multiple family members, your cat...", "在有多个家庭成员的家中，你的猫...", "複数の家族がいる家庭で、あなたの猫は...", "여러 가족 구성원이 있는 집에서, 당신의 고양이는...", "在有多個家庭成員的家中，你的貓...")),
        left_trait: text("Seeks attention from everyone", "向每个人寻求关注", "みんなから注目を求める", "모든 사람에게 관심을 구한다", "向每個人尋求關注"),
        right_trait: text("Bonds primarily with one person", "主要与一个人建立联系", "主に一人と絆を結ぶ", "주로 한 사람과 유대를 형성한다", "主要與一個人建立聯繫"),
    },
    QuestionPair {
        id: 3,
        dimension: Dimension::EI,
        title: Some(text("During typical daytime hours, your cat prefers to...", "在白天的大部分时间里，你的猫喜欢...", "日中の時間帯、あなたの猫は...", "낮 시간 동안, 당신의 고양이는...", "在白天的大部分時間裡，你的貓喜歡...")),
        left_trait: text("Stay in rooms with people", "待在有人的房间里", "人がいる部屋にいる", "사람들이 있는 방에 머문다", "待在有人的房間裡"),
        right_trait: text("Find secluded spots away from activity", "寻找远离活动的僻静角落", "活動から離れた隠れ場所を見つける", "활동에서 떨어진 한적한 곳을 찾는다", "尋找遠離活動的僻靜角落"),
    },
    QuestionPair {
        id: 4,
        dimension: Dimension::EI,
        title: Some(text("When you return home after being away, your cat...", "当你外出归来时，你的猫...", "外出から帰宅した時、あなたの猫は...", "외출 후 집에 돌아왔을 때, 당신의 고양이는...", "當你外出歸來時，你的貓...")),
        left_trait: text("Greets you at the door vocally", "在门口叫着迎接你", "声を出してドアで出迎える", "소리를 내며 문에서 맞이한다", "在門口叫著迎接你"),
        right_trait: text("Acknowledges you subtly or not at all", "只是微微示意或完全无视", "さりげなく認識するか、全く反応しない", "미묘하게 인식하거나 전혀 반응하지 않는다", "只是微微示意或完全無視"),
    },

    // SN
    QuestionPair {
        id: 5,
        dimension: Dimension::SN,
        title: Some(text("When you rearrange furniture or introduce new objects, your cat...", "当你重新摆放家具或引入新物品时，你的猫...", "家具を並べ替えたり、新しい物を置いた時、あなたの猫は...", "가구를 재배치하거나 새로운 물건을 들여놓으면, 당신의 고양이는...", "當你重新擺放家具或引入新物品時，你的貓...")),
        left_trait: text("Shows stress or avoids the changed area", "表现出压力或避开变化的区域", "ストレスを示すか、変わった場所を避ける", "스트레스를 보이거나 변화된 영역을 피한다", "表現出壓力或避開變化的區域"),
        right_trait: text("Investigates enthusiastically", "热情地探索", "熱心に調査する", "열정적으로 조사한다", "熱情地探索"),
    },
    QuestionPair {
        id: 6,
        dimension: Dimension::SN,
        title: Some(text("Regarding feeding times and routines, your cat...", "关于喂食时间和日常习惯，你的猫...", "食事の時間やルーティンについて、あなたの猫は...", "급식 시간과 일과에 관해, 당신의 고양이는...", "關於餵食時間和日常習慣，你的貓...")),
        left_trait: text("Expects meals at exact times daily", "期望每天在固定时间进食", "毎日正確な時間に食事を期待する", "매일 정확한 시간에 식사를 기대한다", "期望每天在固定時間進食"),
        right_trait: text("Adapts easily to schedule changes", "容易适应时间表变化", "スケジュールの変更に簡単に適応する", "일정 변화에 쉽게 적응한다", "容易適應時間表變化"),
    },
    QuestionPair {
        id: 7,
        dimension: Dimension::SN,
        title: Some(text("When offered a new type of food or treat, your cat...", "当提供新类型的食物或零食时，你的猫...", "新しい種類の食べ物やおやつを提供された時、あなたの猫は...", "새로운 종류의 음식이나 간식을 제공받으면, 당신의 고양이는...", "當提供新類型的食物或零食時，你的貓...")),
        left_trait: text("Refuses or is suspicious of unfamiliar food", "拒绝或对陌生食物持怀疑态度", "不慣れな食べ物を拒否するか疑う", "낯선 음식을 거부하거나 의심한다", "拒絕或對陌生食物持懷疑態度"),
        right_trait: text("Tries new foods with interest", "有兴趣尝试新食物", "興味を持って新しい食べ物を試す", "관심을 가지고 새로운 음식을 시도한다", "有興趣嘗試新食物"),
    },
    QuestionPair {
        id: 8,
        dimension: Dimension::SN,
        title: Some(text("Your cat's preferred resting spots are...", "你的猫喜欢的休息地点是...", "あなたの猫の好みの休憩場所は...", "당신의 고양이가 선호하는 휴식 장소는...", "你的貓喜歡的休息地點是...")),
        left_trait: text("Always the same familiar locations", "总是相同的熟悉位置", "いつも同じなじみの場所", "항상 같은 익숙한 장소", "總是相同的熟悉位置"),
        right_trait: text("Varies frequently, exploring new spots", "经常变化，探索新地点", "頻繁に変わり、新しい場所を探る", "자주 바뀌며, 새로운 장소를 탐색한다", "經常變化，探索新地點"),
    },

    // TF
    QuestionPair {
        id: 9,
        dimension: Dimension::TF,
        title: Some(text("When you appear upset or unwell, your cat...", "当你看起来心烦或身体不适时，你的猫...", "あなたが動揺したり体調が悪そうな時、あなたの猫は...", "당신이 화가 나거나 몸이 안 좋아 보일 때, 당신의 고양이는...", "當你看起來心煩或身體不適時，你的貓...")),
        left_trait: text("Continues normal behavior, unaffected", "继续正常行为，不受影响", "影響を受けず、通常の行動を続ける", "영향 받지 않고 평소 행동을 계속한다", "繼續正常行為，不受影響"),
        right_trait: text("Stays close and seems attentive to your mood", "待在身边，似乎关注你的情绪", "近くにいて、あなたの気分に注意を払っているようだ", "가까이 있으며 당신의 기분에 주의를 기울이는 것 같다", "待在身邊，似乎關注你的情緒"),
    },
    QuestionPair {
        id: 10,
        dimension: Dimension::TF,
        title: Some(text("When deciding where to sleep at night, your cat...", "当决定晚上睡在哪里时，你的猫...", "夜どこで寝るか決める時、あなたの猫は...", "밤에 어디서 잘지 결정할 때, 당신의 고양이는...", "當決定晚上睡在哪裡時，你的貓...")),
        left_trait: text("Chooses based on comfort and temperature", "根据舒适度和温度选择", "快適さと温度に基づいて選ぶ", "편안함과 온도에 따라 선택한다", "根據舒適度和溫度選擇"),
        right_trait: text("Prefers sleeping near or with family members", "喜欢睡在家人附近或一起", "家族の近くや一緒に寝ることを好む", "가족 근처나 함께 자는 것을 선호한다", "喜歡睡在家人附近或一起"),
    },
    QuestionPair {
        id: 11,
        dimension: Dimension::TF,
        title: Some(text("Your cat's response to verbal praise or encouragement is...", "你的猫对言语表扬或鼓励的反应是...", "言葉による称賛や励ましに対するあなたの猫の反応は...", "칭찬이나 격려에 대한 당신의 고양이의 반응은...", "你的貓對言語表揚或鼓勵的反應是...")),
        left_trait: text("Indifferent to human vocal cues", "对人类的声音信号漠不关心", "人間の声のシグナルに無関心", "인간의 음성 신호에 무관심하다", "對人類的聲音信號漠不關心"),
        right_trait: text("Responds positively, seems to enjoy it", "积极回应，似乎很享受", "積極的に反応し、楽しんでいるようだ", "긍정적으로 반응하며, 즐기는 것 같다", "積極回應，似乎很享受"),
    },
    QuestionPair {
        id: 12,
        dimension: Dimension::TF,
        title: Some(text("When you call your cat's name, it typically...", "当你叫你的猫的名字时，它通常...", "猫の名前を呼ぶと、通常...", "고양이 이름을 부르면, 보통...", "當你叫你的貓的名字時，牠通常...")),
        left_trait: text("Ignores or acknowledges minimally", "忽略或只是稍微回应", "無視するか、最小限の反応をする", "무시하거나 최소한으로 반응한다", "忽略或只是稍微回應"),
        right_trait: text("Comes or responds attentively", "过来或专注地回应", "来るか、注意深く反応する", "오거나 주의 깊게 반응한다", "過來或專注地回應"),
    },

    // JP
    QuestionPair {
        id: 13,
        dimension: Dimension::JP,
        title: Some(text("Your cat's daily activity pattern is...", "你的猫的日常活动模式是...", "あなたの猫の毎日の活動パターンは...", "당신의 고양이의 일상 활동 패턴은...", "你的貓的日常活動模式是...")),
        left_trait: text("Highly predictable, same times each day", "非常可预测，每天相同时间", "非常に予測可能で、毎日同じ時間", "매우 예측 가능하며, 매일 같은 시간", "非常可預測，每天相同時間"),
        right_trait: text("Unpredictable, varies from day to day", "不可预测，每天都不同", "予測不可能で、日によって変わる", "예측 불가능하며, 날마다 다르다", "不可預測，每天都不同"),
    },
    QuestionPair {
        id: 14,
        dimension: Dimension::JP,
        title: Some(text("During play sessions, your cat...", "在玩耍时，你的猫...", "遊びの時間中、あなたの猫は...", "놀이 시간 동안, 당신의 고양이는...", "在玩耍時，你的貓...")),
        left_trait: text("Plays methodically, focused on one toy", "有条不紊地玩，专注于一个玩具", "方法的に遊び、一つのおもちゃに集中する", "체계적으로 놀며, 하나의 장난감에 집중한다", "有條不紊地玩，專注於一個玩具"),
        right_trait: text("Switches rapidly between activities", "在活动之间快速切换", "活動を急速に切り替える", "활동 사이를 빠르게 전환한다", "在活動之間快速切換"),
    },
    QuestionPair {
        id: 15,
        dimension: Dimension::JP,
        title: Some(text("Your cat's energy bursts (zoomies) occur...", "你的猫的能量爆发（疯跑）发生在...", "あなたの猫のエネルギー爆発（ズーミーズ）は...", "당신의 고양이의 에너지 폭발(줌미)은...", "你的貓的能量爆發（瘋跑）發生在...")),
        left_trait: text("At predictable times (e.g., after meals, evening)", "在可预测的时间（如餐后、傍晚）", "予測可能な時間に（例：食後、夕方）", "예측 가능한 시간에 (예: 식후, 저녁)", "在可預測的時間（如餐後、傍晚）"),
        right_trait: text("Randomly throughout the day or night", "全天或夜间随机发生", "一日中または夜間にランダムに", "하루 종일 또는 밤에 무작위로", "全天或夜間隨機發生"),
    },
    QuestionPair {
        id: 16,
        dimension: Dimension::JP,
        title: Some(text("When it's time for grooming or nail trimming, your cat...", "当需要梳毛或剪指甲时，你的猫...", "グルーミングや爪切りの時間になると、あなたの猫は...", "그루밍이나 발톱 다듬기 시간이 되면, 당신의 고양이는...", "當需要梳毛或剪指甲時，你的貓...")),
        left_trait: text("Tolerates routine care calmly", "平静地接受日常护理", "日常のケアを穏やかに受け入れる", "일상적인 관리를 차분히 받아들인다", "平靜地接受日常護理"),
        right_trait: text("Resists or escapes unpredictably", "不可预测地抵抗或逃跑", "予測不可能に抵抗したり逃げたりする", "예측 불가능하게 저항하거나 도망친다", "不可預測地抵抗或逃跑"),
    },
];
