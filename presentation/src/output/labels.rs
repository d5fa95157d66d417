//! Localized interface labels

use council_domain::Language;

/// Fixed interface strings for one language
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub category: &'static str,
    pub life_stage: &'static str,
    pub debate_title: &'static str,
    pub verdict_title: &'static str,
    pub diagnosis: &'static str,
    pub conflict_resolution: &'static str,
    pub strategy: &'static str,
    pub code: &'static str,
    pub loading: &'static str,
    pub proceed_verdict: &'static str,
    pub shadow_alert: &'static str,
    pub select_path: &'static str,
    pub risk_level: &'static str,
    pub lead_agent: &'static str,
    pub back_to_index: &'static str,
    pub upside: &'static str,
    pub metrics: &'static str,
    pub locked: &'static str,
    pub reset_confirm: &'static str,
    pub disclaimer: &'static str,
}

const ZH_TW: Labels = Labels {
    title: "The Council",
    subtitle: "Biography of Decisions",
    category: "選擇議題分類",
    life_stage: "當前階段",
    debate_title: "委員會審議紀錄",
    verdict_title: "最終戰略建議",
    diagnosis: "局勢診斷",
    conflict_resolution: "觀點權衡與博弈",
    strategy: "執行行動方針",
    code: "核心思維模型",
    loading: "正在翻閱智庫檔案...",
    proceed_verdict: "查看戰略藍圖",
    shadow_alert: "注意：已進入權謀模式，建議將不帶道德濾鏡。",
    select_path: "選擇你的路徑",
    risk_level: "風險評估",
    lead_agent: "主筆顧問",
    back_to_index: "返回目錄",
    upside: "潛在回報",
    metrics: "戰略指標",
    locked: "訂閱限定",
    reset_confirm: "確定要重新開始嗎？",
    disclaimer: "免責聲明：本服務由人工智慧驅動，模擬歷史與當代人物的思維模式。所有回應皆為演算法生成，不代表真實人物之言論、立場或背書。",
};

const EN: Labels = Labels {
    title: "The Council",
    subtitle: "Biography of Decisions",
    category: "Category",
    life_stage: "Current Stage",
    debate_title: "Deliberation Records",
    verdict_title: "Strategic Verdict",
    diagnosis: "Diagnosis",
    conflict_resolution: "Perspective Balance",
    strategy: "Directives",
    code: "Core Philosophy",
    loading: "Consulting the archives...",
    proceed_verdict: "View Strategic Blueprint",
    shadow_alert: "Notice: Machiavellian Mode active. Ethical filters relaxed.",
    select_path: "Select Your Path",
    risk_level: "Risk Profile",
    lead_agent: "Lead Advisor",
    back_to_index: "Return to Index",
    upside: "Projected Upside",
    metrics: "Strategic Metrics",
    locked: "Members Only",
    reset_confirm: "Are you sure you want to restart?",
    disclaimer: "Disclaimer: AI-simulated perspectives of historical and contemporary figures. Responses are generated and do not represent the real people's views or endorsements.",
};

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::ZhTw => &ZH_TW,
            Language::En => &EN,
        }
    }
}
