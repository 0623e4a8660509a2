//! Static marketing copy for the home page.
//!
//! Everything here is compiled in; the template only arranges it.

/// A headline number in the trust strip.
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// An icon card with a title and one sentence.
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// A numbered onboarding step.
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub body: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub avatar: &'static str,
    pub author: &'static str,
    pub affiliation: &'static str,
}

/// A lead product tier.
pub struct Product {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
    pub best: bool,
}

/// Registered business details shown in the footer.
pub struct BusinessInfo {
    pub company: &'static str,
    pub representative: &'static str,
    pub registration_number: &'static str,
}

pub const PAGE_TITLE: &str = "로켓콜 | 자동차 딜러 전문 약속콜 서비스";
pub const PAGE_DESCRIPTION: &str = "확정된 고객만 딱! 자동차 딜러를 위한 프리미엄 약속콜 서비스. \
     고객 유치 걱정 끝, 로켓콜이 검증된 고객을 보내드립니다.";
pub const PAGE_KEYWORDS: &str =
    "자동차 딜러, 약속콜, 고객 유치, TM, 텔레마케팅, 자동차 영업, 고객 DB";
pub const TAGLINE: &str = "자동차 딜러를 위한 프리미엄 약속콜 서비스";
pub const DEALER_KINDS: &str = "신차 딜러 · 중고차 딜러 · 장기렌트 딜러 · 리스 딜러";

pub const STATS: &[Stat] = &[
    Stat { value: "98%", label: "약속 성사율" },
    Stat { value: "5,000+", label: "누적 약속 건수" },
    Stat { value: "300+", label: "제휴 딜러" },
    Stat { value: "4.9", label: "딜러 만족도" },
];

pub const PAIN_POINTS: &[Card] = &[
    Card {
        icon: "😰",
        title: "연락 두절 고객",
        body: "상담 약속 잡아도 당일에 연락이 안 되는 고객이 너무 많아요",
    },
    Card {
        icon: "🙅",
        title: "구매 의사 없는 고객",
        body: "막상 만나보면 그냥 구경만 하려는 사람들이 대부분이에요",
    },
    Card {
        icon: "📞",
        title: "중복 연락",
        body: "이미 다른 딜러랑 상담 중인 고객에게 연락하는 경우가 많아요",
    },
    Card {
        icon: "⏰",
        title: "시간 낭비",
        body: "직접 고객 발굴하느라 정작 영업할 시간이 부족해요",
    },
];

pub const VERIFICATION_STEPS: &[Card] = &[
    Card {
        icon: "📋",
        title: "1차 검증: 구매 의향 확인",
        body: "전문 TM팀이 고객의 구매 의향, 예산, 희망 차종을 철저히 확인합니다",
    },
    Card {
        icon: "✅",
        title: "2차 검증: 약속 확정",
        body: "방문 일정을 확정하고, 당일 리마인드 콜까지 진행합니다",
    },
];

pub const REASONS: &[Card] = &[
    Card { icon: "🎯", title: "확정 고객만", body: "구매 의사가 확실한 고객만 연결해드립니다" },
    Card { icon: "⏱️", title: "시간 절약", body: "고객 발굴에 쓰던 시간을 영업에 집중하세요" },
    Card { icon: "📈", title: "매출 증대", body: "양질의 고객으로 계약 성사율이 올라갑니다" },
    Card { icon: "🔒", title: "중복 방지", body: "이미 상담 중인 고객은 배정하지 않습니다" },
    Card { icon: "🤝", title: "전담 매니저", body: "담당 매니저가 1:1로 케어해드립니다" },
    Card { icon: "💰", title: "합리적 비용", body: "성과 기반의 합리적인 비용 체계" },
];

pub const STEPS: &[Step] = &[
    Step { number: 1, title: "상담 신청", body: "간단한 정보만 입력하세요" },
    Step { number: 2, title: "니즈 파악", body: "전담 매니저가 연락드립니다" },
    Step { number: 3, title: "서비스 시작", body: "맞춤 플랜으로 시작합니다" },
    Step { number: 4, title: "고객 배정", body: "확정 고객을 보내드립니다" },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "예전엔 하루에 수십 통 전화해도 약속 잡기 힘들었는데, 로켓콜 쓰고 나서는 \
                진짜 살 사람만 와요. 계약률이 3배는 올랐습니다.",
        avatar: "👨",
        author: "김OO 딜러",
        affiliation: "현대자동차 | 경력 8년",
    },
    Testimonial {
        quote: "노쇼가 거의 없어요. 확정된 고객만 온다니까 처음엔 반신반의했는데, \
                정말 약속 잡힌 고객들이 제때 방문합니다.",
        avatar: "👩",
        author: "이OO 딜러",
        affiliation: "BMW | 경력 5년",
    },
    Testimonial {
        quote: "신입이라 고객 만나기가 어려웠는데, 로켓콜 덕분에 꾸준히 고객 만나고 \
                실적도 쌓고 있어요. 신입 딜러분들께 강추합니다!",
        avatar: "👨",
        author: "박OO 딜러",
        affiliation: "중고차딜러 | 경력 1년",
    },
];

pub const PRODUCTS: &[Product] = &[
    Product {
        icon: "🎯",
        title: "확정 고객 DB",
        summary: "구매 의사 확인 완료 + 방문 일정 확정된 고객만 배정",
        features: &["2단계 검증 완료", "방문 일정 확정", "당일 리마인드 콜", "노쇼 시 100% 재배정"],
        best: true,
    },
    Product {
        icon: "📊",
        title: "구매 의향 DB",
        summary: "차량 구매 의사가 있는 잠재 고객 정보 제공",
        features: &["구매 의향 확인", "희망 차종/예산 정보", "연락처 정보 제공", "합리적인 단가"],
        best: false,
    },
];

pub const BUSINESS: BusinessInfo = BusinessInfo {
    company: "제이코리아",
    representative: "이주영",
    registration_number: "278-30-01540",
};

pub const COPYRIGHT: &str = "© 2024 로켓콜. All rights reserved.";
