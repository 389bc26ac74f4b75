use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub years_experience: u32,
    pub projects_shipped: u32,
    pub discord_bots: u32,
}

#[derive(Debug, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub username: &'static str,
    pub title: &'static str,
    pub status: &'static str,
    pub timezone: &'static str,
    pub bio: &'static str,
    pub stats: ProfileStats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub value: &'static str,
    pub rarity: &'static str,
    pub rarity_color: &'static str,
    pub element: &'static str,
    pub element_color: &'static str,
    pub element_icon: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub profile: Profile,
    pub skills: Vec<SkillCard>,
    pub tech_stack: &'static [&'static str],
    pub timestamp: DateTime<Utc>,
}

// Статические данные портфолио; timestamp проставляется в момент запроса
pub fn portfolio_data() -> PortfolioData {
    PortfolioData {
        profile: Profile {
            name: "Nitesh Sha",
            username: "fr0strated",
            title: "Full Stack Developer · Data Science · Discord Bots",
            status: "Open for collaborations",
            timezone: "IST (UTC+5:30)",
            bio: "I craft immersive front-end experiences, engineer intelligent backends, \
                  and analyse data to unlock insights. On Discord, I'm the go-to builder \
                  for bots that elevate communities.",
            stats: ProfileStats {
                years_experience: 5,
                projects_shipped: 20,
                discord_bots: 15,
            },
        },
        skills: vec![
            SkillCard {
                icon: "ri-code-s-slash-line",
                title: "Frontend",
                tags: &["React", "TypeScript", "Next.js", "Tailwind"],
                value: "8.8K",
                rarity: "Mythical",
                rarity_color: "#ef4444",
                element: "Code",
                element_color: "#6366f1",
                element_icon: "ri-code-box-line",
            },
            SkillCard {
                icon: "ri-server-line",
                title: "Backend",
                tags: &["Node.js", "Python", "Flask", "PostgreSQL"],
                value: "5.5K",
                rarity: "Epic",
                rarity_color: "#a855f7",
                element: "Server",
                element_color: "#0ea5e9",
                element_icon: "ri-server-line",
            },
            SkillCard {
                icon: "ri-bar-chart-box-line",
                title: "Data Science",
                tags: &["Python", "R", "NumPy", "Pandas"],
                value: "3.2K",
                rarity: "Uncommon",
                rarity_color: "#3b82f6",
                element: "Analytics",
                element_color: "#06b6d4",
                element_icon: "ri-bar-chart-2-line",
            },
        ],
        tech_stack: &[
            "React", "TypeScript", "Next.js", "Python", "C++", "discord.js", "Java",
            "Node.js", "Tailwind", "Figma", "C", "NumPy", "Pandas", "R", "Flask",
            "PostgreSQL",
        ],
        timestamp: Utc::now(),
    }
}
