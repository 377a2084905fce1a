//! Rule based recommendations followed by a fixed pool of general tips.
use serde::Serialize;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Warning,
    Success,
    Info,
    Action,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::Warning => "warning",
            RecommendationKind::Success => "success",
            RecommendationKind::Info => "info",
            RecommendationKind::Action => "action",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Shield,
    TrendingUp,
    AlertTriangle,
    Target,
    Zap,
    BookOpen,
    PiggyBank,
    CreditCard,
    Smile,
    Coffee,
    Briefcase,
    Home,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub id: &'static str,
    pub title: &'static str,
    pub description: Cow<'static, str>,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecommendationParams {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub liquid_assets: f64,
    pub monthly_income: f64,
    pub monthly_installments: f64,
    pub health_score: f64,
}

struct Tip {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    kind: RecommendationKind,
    icon: Icon,
}

impl Tip {
    fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            id: self.id,
            title: self.title,
            description: Cow::Borrowed(self.description),
            kind: self.kind,
            icon: self.icon,
        }
    }
}

const GENERAL_TIPS: &[Tip] = &[
    Tip {
        id: "budget-rule",
        title: "Try the 50/30/20 Rule",
        description: "Put 50% of your income towards needs, 30% towards wants and 20% towards savings for a balanced budget.",
        kind: RecommendationKind::Info,
        icon: Icon::BookOpen,
    },
    Tip {
        id: "compound-interest",
        title: "The Power of Starting Early",
        description: "Investing regularly, even in small amounts, builds real wealth over the long run thanks to compounding.",
        kind: RecommendationKind::Success,
        icon: Icon::PiggyBank,
    },
    Tip {
        id: "track-habit",
        title: "Track Your Spending",
        description: "Small purchases like coffee and subscriptions add up by the end of the month. Review your expenses regularly.",
        kind: RecommendationKind::Info,
        icon: Icon::Zap,
    },
    Tip {
        id: "credit-score",
        title: "Protect Your Credit Score",
        description: "Paying bills and credit card balances on time is the easiest way to raise your credit score.",
        kind: RecommendationKind::Action,
        icon: Icon::CreditCard,
    },
    Tip {
        id: "impulse-buying",
        title: "Avoid Impulse Buying",
        description: "Wait 24 hours before a big purchase. If you still want it and your budget allows, go ahead.",
        kind: RecommendationKind::Warning,
        icon: Icon::AlertTriangle,
    },
    Tip {
        id: "diversification",
        title: "Diversify Your Investments",
        description: "Don't put all your eggs in one basket. Spreading across gold, currencies and equities lowers your risk.",
        kind: RecommendationKind::Info,
        icon: Icon::TrendingUp,
    },
    Tip {
        id: "subscription-audit",
        title: "Audit Your Subscriptions",
        description: "Any digital subscriptions you no longer use? Cancelling them saves money every month.",
        kind: RecommendationKind::Action,
        icon: Icon::Zap,
    },
    Tip {
        id: "financial-goals",
        title: "Set Financial Goals",
        description: "A holiday, a car or a home. Having a target boosts your motivation to save.",
        kind: RecommendationKind::Success,
        icon: Icon::Target,
    },
    Tip {
        id: "inflation-protection",
        title: "Protect Against Inflation",
        description: "Rather than holding cash, keep your money in instruments that preserve its value.",
        kind: RecommendationKind::Warning,
        icon: Icon::Shield,
    },
    Tip {
        id: "mental-health",
        title: "Money and Peace of Mind",
        description: "Financial planning matters not just for your wallet but for your peace of mind too.",
        kind: RecommendationKind::Info,
        icon: Icon::Smile,
    },
    Tip {
        id: "side-hustle",
        title: "Create Extra Income Streams",
        description: "Turn your skills into income. Freelance work or passive income can ease pressure on your budget.",
        kind: RecommendationKind::Action,
        icon: Icon::Briefcase,
    },
    Tip {
        id: "cooking",
        title: "Cook at Home",
        description: "Cooking at home instead of eating out is better for your health and your wallet. The monthly savings can be surprising.",
        kind: RecommendationKind::Info,
        icon: Icon::Coffee,
    },
    Tip {
        id: "insurance",
        title: "Insure Against Risks",
        description: "Health, home or car insurance is the cheapest protection against large unexpected costs.",
        kind: RecommendationKind::Warning,
        icon: Icon::Shield,
    },
    Tip {
        id: "negotiate",
        title: "Don't Be Afraid to Negotiate",
        description: "Negotiating on large purchases or service contracts can save more than you expect.",
        kind: RecommendationKind::Action,
        icon: Icon::Zap,
    },
    Tip {
        id: "home-equity",
        title: "Your Home Is an Investment",
        description: "If you own your home, its appreciation is a major part of your long-term wealth. Don't neglect its upkeep.",
        kind: RecommendationKind::Success,
        icon: Icon::Home,
    },
];

/// The general tips alone, in their fixed order.
pub fn general_tips() -> impl Iterator<Item = Recommendation> {
    GENERAL_TIPS.iter().map(Tip::to_recommendation)
}

/// Personalized recommendations (in rule order, only those that fire)
/// followed by every general tip.
pub fn get_recommendations(params: &RecommendationParams) -> Vec<Recommendation> {
    let mut recommendations = Vec::with_capacity(GENERAL_TIPS.len() + 4);

    // Expenses are approximated as half of income.
    let monthly_expenses = params.monthly_income * 0.5;
    let emergency_fund_months = if monthly_expenses > 0.0 {
        params.liquid_assets / monthly_expenses
    } else {
        0.0
    };
    if emergency_fund_months < 3.0 {
        recommendations.push(Recommendation {
            id: "emergency-fund",
            title: "Build an Emergency Fund",
            description: Cow::Borrowed(
                "Your liquid assets are below our target of 3 months of expenses. Consider setting cash aside for the unexpected.",
            ),
            kind: RecommendationKind::Warning,
            icon: Icon::Shield,
        });
    }

    if params.total_assets > 0.0 {
        let debt_ratio = params.total_liabilities / params.total_assets;
        if debt_ratio > 0.5 {
            recommendations.push(Recommendation {
                id: "high-debt",
                title: "Lighten Your Debt Load",
                description: Cow::Owned(format!(
                    "Your debts equal {:.0}% of your assets. Bringing this below 30% increases your financial freedom.",
                    debt_ratio * 100.0
                )),
                kind: RecommendationKind::Action,
                icon: Icon::AlertTriangle,
            });
        }
    }

    if params.monthly_income > 0.0 {
        let burden = params.monthly_installments / params.monthly_income;
        if burden > 0.4 {
            recommendations.push(Recommendation {
                id: "high-installments",
                title: "Your Monthly Installments Are High",
                description: Cow::Owned(format!(
                    "{:.0}% of your income goes to installments. Focus on reducing existing ones before borrowing again.",
                    burden * 100.0
                )),
                kind: RecommendationKind::Warning,
                icon: Icon::Target,
            });
        }
    }

    if params.health_score > 80.0 && params.liquid_assets > params.monthly_income * 3.0 {
        recommendations.push(Recommendation {
            id: "invest",
            title: "Consider Investment Opportunities",
            description: Cow::Borrowed(
                "Your financial health is great! Move surplus cash into funds, equities or gold to protect it from inflation.",
            ),
            kind: RecommendationKind::Success,
            icon: Icon::TrendingUp,
        });
    }

    recommendations.extend(general_tips());
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIP_IDS: [&str; 15] = [
        "budget-rule",
        "compound-interest",
        "track-habit",
        "credit-score",
        "impulse-buying",
        "diversification",
        "subscription-audit",
        "financial-goals",
        "inflation-protection",
        "mental-health",
        "side-hustle",
        "cooking",
        "insurance",
        "negotiate",
        "home-equity",
    ];

    fn ids(recommendations: &[Recommendation]) -> Vec<&'static str> {
        recommendations.iter().map(|r| r.id).collect()
    }

    fn comfortable() -> RecommendationParams {
        RecommendationParams {
            total_assets: 100000.0,
            total_liabilities: 20000.0,
            liquid_assets: 40000.0,
            monthly_income: 10000.0,
            monthly_installments: 1000.0,
            health_score: 70.0,
        }
    }

    #[test]
    fn test_no_personalized_items_when_healthy() {
        let recommendations = get_recommendations(&comfortable());
        assert_eq!(ids(&recommendations), TIP_IDS);
    }

    #[test]
    fn test_high_debt_precedes_tips() {
        let params = RecommendationParams {
            total_assets: 10000.0,
            total_liabilities: 8000.0,
            ..comfortable()
        };
        let recommendations = get_recommendations(&params);
        assert_eq!(recommendations[0].id, "high-debt");
        assert_eq!(recommendations[0].kind, RecommendationKind::Action);
        assert!(recommendations[0].description.contains("80%"));
        assert_eq!(ids(&recommendations[1..]), TIP_IDS);
    }

    #[test]
    fn test_rules_fire_in_order() {
        let params = RecommendationParams {
            total_assets: 10000.0,
            total_liabilities: 9000.0,
            liquid_assets: 1000.0,
            monthly_income: 1000.0,
            monthly_installments: 450.0,
            health_score: 30.0,
        };
        let recommendations = get_recommendations(&params);
        assert_eq!(
            ids(&recommendations[..3]),
            ["emergency-fund", "high-debt", "high-installments"]
        );
        assert!(recommendations[2].description.starts_with("45%"));
        assert_eq!(recommendations.len(), 3 + TIP_IDS.len());

        let params = RecommendationParams {
            liquid_assets: 5000.0,
            monthly_installments: 100.0,
            health_score: 81.0,
            ..params
        };
        let recommendations = get_recommendations(&params);
        assert_eq!(ids(&recommendations[..2]), ["high-debt", "invest"]);
        assert_eq!(recommendations[2].id, TIP_IDS[0]);
    }

    #[test]
    fn test_zero_income_always_needs_emergency_fund() {
        let params = RecommendationParams {
            monthly_income: 0.0,
            monthly_installments: 0.0,
            ..comfortable()
        };
        let recommendations = get_recommendations(&params);
        assert_eq!(recommendations[0].id, "emergency-fund");
        assert_eq!(recommendations[0].icon, Icon::Shield);
        assert_eq!(recommendations[1].id, TIP_IDS[0]);
    }

    #[test]
    fn test_invest_needs_score_above_80() {
        let mut params = comfortable();
        params.health_score = 80.0;
        assert_eq!(get_recommendations(&params)[0].id, TIP_IDS[0]);
        params.health_score = 85.0;
        assert_eq!(get_recommendations(&params)[0].id, "invest");
    }

    #[test]
    fn test_tags_serialize_as_strings() {
        let tip = general_tips().next().unwrap();
        let json = serde_json::to_value(&tip).unwrap();
        assert_eq!(json["type"], "info");
        assert_eq!(json["icon"], "book-open");
        let json = serde_json::to_value(Icon::AlertTriangle).unwrap();
        assert_eq!(json, "alert-triangle");
    }

    #[test]
    fn test_deterministic() {
        let params = comfortable();
        assert_eq!(get_recommendations(&params), get_recommendations(&params));
    }
}
