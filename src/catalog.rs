//! 静态目录数据
//!
//! 社团名单、关键词扩展表、主题链接表与停用词表。
//! 全部数据在进程启动时构建一次，只读，通过共享状态注入各处理器。

use std::collections::{HashMap, HashSet};

/// SFU 官方社团列表页
pub const CLUB_LIST_URL: &str = "https://go.sfss.ca/clubs/list";

/// 静态目录
///
/// 所有请求处理器共享的只读配置数据
pub struct Catalog {
    /// 已知社团名单（固定顺序）
    pub clubs: Vec<&'static str>,
    /// 关键词 -> 相关词扩展表（键与词均为小写）
    pub keyword_map: HashMap<&'static str, Vec<&'static str>>,
    /// 主题 -> 信息页 URL
    pub topic_links: HashMap<&'static str, &'static str>,
    /// 查询停用词
    pub stopwords: HashSet<&'static str>,
}

impl Catalog {
    /// 构建内置目录数据
    pub fn builtin() -> Self {
        Self {
            clubs: builtin_clubs(),
            keyword_map: builtin_keyword_map(),
            topic_links: builtin_topic_links(),
            stopwords: builtin_stopwords(),
        }
    }

    /// 按主题查找信息页 URL
    pub fn topic_url(&self, topic: &str) -> Option<&'static str> {
        self.topic_links.get(topic).copied()
    }
}

fn builtin_clubs() -> Vec<&'static str> {
    vec![
        "350 - SFU",
        "Accounting Student Association - SFU",
        "Ace SFU",
        "Afghanistan Student Union",
        "Ahmadiyya Muslim Student Association (AMSA)",
        "AIESEC",
        "ALAS (Association of Latin American Students)",
        "Anime Club - SFU",
        "Arab Students' Association",
        "Ascend Leadership",
        "Astronomy Club - SFU",
        "Backpacking Club",
        "Bangladesh Students' Alliance",
        "Bhangra - SFU",
        "Bowling 300",
        "BRASA SFU",
        "Burnaby Mountain Toastmasters",
        "Campus Association of Baha'i Studies",
        "Campus Vibe for Christ",
        "Canadian Cancer Society - SFU",
        "Canadian Liver Foundation SFU",
        "Canadianized Asian Club (CAC)",
        "CaseIT",
        "Chess Club - SFU",
        "Choir - SFU",
        "Christian Leadership Initiative - SFU",
        "Christian Students @ SFU",
        "Concert Orchestra - SFU",
        "Debate Society",
        "Developers & Systems Club",
        "Dodo Club",
        "EAT!SFU",
        "Enactus SFU",
        "Engineers Without Borders - SFU Chapter",
        "Ethiopian & Eritrean Students Association",
        "Evangelical Chinese Bible Fellowship (ECBF)",
        "Exercise is Medicine SFU",
        "Filipino Students Association",
        "Finance Student Association (FINSA)",
        "Game Developers Club",
        "Giddha - SFU",
        "Google Developer Student Club - SFU",
        "Hanvoice SFU",
        "Hiking Club",
        "Hillel Jewish Students Association",
        "Hip Hop Club - SFU",
        "Hong Kong Society (HKS)",
        "Human Resources Student Association",
        "Indian Student Federation (ISF)",
        "Indoor Climbing Club",
        "Iranian Club - SFU",
        "Ismaili Students Association",
        "Japanese Network - SFU",
        "Jazz Band - Simon Fraser",
        "JDC West - SFU",
        "Korean Storm (K.STORM)",
        "Latin Dance Passion - SFU",
        "Love Your Neighbour Club",
        "Malaysia Singapore Students Club",
        "Management Information Systems Association",
        "Model United Nations - SFU",
        "Music Discussion Club",
        "Muslim Students Association",
        "NeuraXtension",
        "Operation Smile SFU",
        "Outdoors Club - SFU",
        "Pakistan Students Association",
        "Palestinian Youth Movement (PYM SFU)",
        "Phi Delta Epsilon",
        "Power to Change (P2C)",
        "Pre-Law Society - SFU",
        "Pre-Med Society - SFU",
        "Pre-Vet & Animal Wellness Club",
        "Provincial BC Conservatives",
        "Punjabi Student Association - SFU",
        "Reclaim Tech",
        "Rock Music Club",
        "SFU Artists",
        "SFU ASL Club",
        "SFU Befikre Dance Team",
        "SFU Blood, Organ, and Stem Cell Club",
        "SFU Cybersecurity Club",
        "SFU Dragon Boat",
        "SFU Esports Association",
        "SFU First Responders",
        "SFU Foodie Club",
        "SFU Golf Club",
        "SFU Hanfu Culture Society",
        "SFU Hindu Yuva",
        "SFU Magic the Gathering Club (MTG)",
        "SFU Mechanical Keyboards Club",
        "SFU OS Development",
        "SFU Peak Frequency",
        "SFU Pokemon Go Official Group",
        "SFU Robotics Club",
        "SFU Sports Analytics Club",
        "SFU Swifties",
        "SFU Thaqalyn Muslim Association",
        "SFU Transit Enthusiasts Club (SFU TEC)",
        "Sikh Students' Association - SFU",
        "Simon Fraser Investment Club",
        "Ski and Snowboard Club",
        "Smash Club",
        "Speech and Hearing Club",
        "STEM Fellowship",
        "Student Marketing Association",
        "Taiwanese Association - SFU",
        "Team Phantom: SFU Formula SAE Electric",
        "The FentaNIL Project at SFU (TFP)",
        "UNICEF - SFU",
        "University Bible Fellowship",
        "University Christian Ministries",
        "UPhoto Photography Club",
        "Vietnamese Student Association",
        "Women in Clean Tech",
        "Women In Engineering",
        "Women in STEM",
        "Young Women in Business SFU",
    ]
}

fn builtin_keyword_map() -> HashMap<&'static str, Vec<&'static str>> {
    let mut map = HashMap::new();

    // 技术类
    map.insert(
        "coding",
        vec![
            "developers",
            "google developer",
            "cybersecurity",
            "programming",
            "software",
            "game development",
        ],
    );
    map.insert(
        "programming",
        vec!["developers", "google developer", "coding", "software", "hacking"],
    );
    map.insert(
        "developer",
        vec!["developers", "google developer", "cybersecurity", "software", "game development"],
    );
    map.insert(
        "cybersecurity",
        vec!["hacking", "security", "privacy", "developers"],
    );
    map.insert(
        "ai",
        vec!["machine learning", "data science", "robotics", "cybersecurity", "analytics"],
    );
    map.insert(
        "technology",
        vec!["robotics", "cybersecurity", "developers", "tech"],
    );

    // 商科与金融
    map.insert(
        "business",
        vec!["entrepreneurship", "finance", "marketing", "investment", "accounting"],
    );
    map.insert(
        "entrepreneurship",
        vec!["business", "startups", "finance", "networking"],
    );
    map.insert("marketing", vec!["business", "advertising", "branding"]);
    map.insert(
        "finance",
        vec!["investing", "investment", "accounting", "trading"],
    );
    map.insert(
        "investment",
        vec!["finance", "stocks", "investment club"],
    );

    // 辩论与演讲
    map.insert(
        "debating",
        vec!["debate", "public speaking", "model united nations", "toastmasters"],
    );
    map.insert(
        "debate",
        vec!["debating", "public speaking", "model united nations", "toastmasters"],
    );
    map.insert(
        "speaking",
        vec!["debate", "toastmasters", "speech", "presentation"],
    );

    // 理工类
    map.insert(
        "robotics",
        vec!["engineering", "hardware", "electronics", "automation", "formula"],
    );
    map.insert(
        "engineering",
        vec!["robotics", "engineers", "formula", "mechanical keyboards"],
    );
    map.insert(
        "science",
        vec!["astronomy", "stem", "analytics", "medicine"],
    );

    // 户外与运动
    map.insert("hiking", vec!["outdoors", "backpacking", "camping"]);
    map.insert("climbing", vec!["indoor climbing", "bouldering"]);
    map.insert("skiing", vec!["snowboard", "ski", "winter sports"]);
    map.insert("golf", vec!["golf club", "sports"]);

    // 文化艺术
    map.insert(
        "music",
        vec!["choir", "jazz", "orchestra", "rock music", "band"],
    );
    map.insert(
        "dance",
        vec!["bhangra", "giddha", "hip hop", "latin dance", "befikre"],
    );
    map.insert(
        "photography",
        vec!["photo", "uphoto", "artists", "visual arts"],
    );
    map.insert("anime", vec!["manga", "cosplay", "japanese"]);
    map.insert("gaming", vec!["esports", "smash", "pokemon go", "magic the gathering"]);

    // 社会文化
    map.insert(
        "volunteering",
        vec!["unicef", "cancer society", "operation smile", "blood"],
    );
    map.insert(
        "sustainability",
        vec!["clean tech", "environment", "350"],
    );
    map.insert(
        "politics",
        vec!["conservatives", "model united nations", "student government"],
    );
    map.insert(
        "women",
        vec!["women in stem", "women in engineering", "women in business", "clean tech"],
    );
    map.insert(
        "religion",
        vec!["christian", "muslim", "sikh", "hindu", "bible"],
    );
    map.insert(
        "christian",
        vec!["bible", "christ", "christian", "evangelical"],
    );
    map.insert("muslim", vec!["muslim", "islam", "ismaili", "thaqalyn"]);
    map.insert("hindu", vec!["hindu yuva", "indian", "punjabi"]);
    map.insert("sikh", vec!["sikh", "punjabi"]);
    map.insert("jewish", vec!["hillel", "jewish"]);

    // 其他
    map.insert("food", vec!["foodie", "eat", "cuisine"]);
    map.insert("medicine", vec!["pre-med", "exercise is medicine", "phi delta epsilon"]);
    map.insert("law", vec!["pre-law", "legal"]);

    map
}

fn builtin_topic_links() -> HashMap<&'static str, &'static str> {
    let mut map = HashMap::new();

    map.insert("clubs", "https://go.sfss.ca/clubs/list");
    map.insert("food", "https://www.sfu.ca/food/wheretoeat.html");
    map.insert(
        "financial_aid",
        "https://www.sfu.ca/students/financial-aid/undergraduate.html",
    );
    map.insert(
        "counseling",
        "https://www.sfu.ca/students/health/support-resources/counselling-services.html",
    );
    map.insert(
        "admission_appeals",
        "https://www.sfu.ca/students/enrolment-services/appeals/admission-appeals.html",
    );
    map.insert(
        "general_appeals",
        "https://www.sfu.ca/students/enrolment-services/appeals.html",
    );
    map.insert("contact", "https://www.sfu.ca/students/contact/ris.html");

    // 学术诚信专页
    map.insert(
        "academic_integrity_violations",
        "https://www.sfu.ca/students/enrolment-services/academic-integrity/violations.html",
    );
    map.insert(
        "academic_integrity_risks",
        "https://www.sfu.ca/students/enrolment-services/academic-integrity/putting-yourself-at-risk.html",
    );
    map.insert(
        "academic_integrity_support",
        "https://www.sfu.ca/students/enrolment-services/academic-integrity/support-and-resources.html",
    );
    map.insert(
        "academic_integrity_ai",
        "https://www.sfu.ca/students/enrolment-services/academic-integrity/using-generative-ai.html",
    );
    map.insert(
        "academic_integrity_process",
        "https://www.sfu.ca/students/enrolment-services/academic-integrity/academic-disciplinary-process.html",
    );
    map.insert(
        "academic_integrity_ombudsperson",
        "https://www.sfu.ca/ombudsperson.html",
    );

    map
}

fn builtin_stopwords() -> HashSet<&'static str> {
    ["is", "there", "a", "for", "club", "at", "sfu", "any", "do", "you", "have"]
        .into_iter()
        .collect()
}
