//! Biography, work history, projects and contact details shown below the hero.

/// Number of characters of a project description shown on its card.
const EXCERPT_CHARS: usize = 100;
/// Number of technology tags shown on a project card.
const CARD_TECH_TAGS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub field: &'static str,
    pub institution: &'static str,
    pub years: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub company: &'static str,
    pub location: &'static str,
    pub title: &'static str,
    pub dates: &'static str,
    /// Paragraphs separated by a blank line.
    pub description: &'static str,
}

impl Role {
    pub fn paragraphs(&self) -> impl Iterator<Item = &'static str> {
        self.description
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

impl Project {
    /// Card text: the description cut to a fixed number of characters, with an
    /// ellipsis when anything was cut.
    pub fn excerpt(&self) -> String {
        let mut chars = self.description.chars();
        let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
        if chars.next().is_some() {
            format!("{}...", head.trim_end())
        } else {
            head
        }
    }

    pub fn card_tech(&self) -> &'static [&'static str] {
        &self.tech[..self.tech.len().min(CARD_TECH_TAGS)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

pub const ABOUT_HEADLINE: &str =
    "Full-Stack AI Engineer turning complex data into intelligent solutions";

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "I'm a Full-Stack AI Engineer specializing in building scalable data infrastructure and \
     intelligent ML systems. Currently at Passageway, I architect enterprise-scale solutions that \
     process terabytes of smart meter data, transforming raw information into actionable insights.",
    "My passion lies in leveraging cutting-edge technologies, from LLMs and GenAI to distributed \
     data systems, to solve real-world challenges. I'm committed to building solutions that are \
     not just powerful, but also scalable and elegant.",
    "Whether it's designing data lakehouses, developing ML models for anomaly detection, or \
     implementing RAG systems with multi-agent workflows, I thrive on turning complex problems \
     into simple, intelligent solutions.",
];

pub const PASSIONS: [&str; 6] = [
    "Building Scalable AI Systems",
    "Solving Real-World Problems",
    "Working with LLM Tech",
    "Crafting Clean Code",
    "Sleeping in my spare time",
    "Exploring New Technologies",
];

pub const EDUCATION: [Education; 3] = [
    Education {
        degree: "Part Time PhD",
        field: "Mechanical & Industrial Engineering",
        institution: "IIT Roorkee, Uttarakhand",
        years: "2025 - Cont.",
    },
    Education {
        degree: "M.Tech in Solid State Electronics Materials",
        field: "Department of Physics",
        institution: "IIT Roorkee, Uttarakhand",
        years: "2016 - 2018",
    },
    Education {
        degree: "B.Tech in Electronics & Communication",
        field: "Electronics & Communication Technology",
        institution: "UIET, CSJM University Kanpur",
        years: "2005 - 2009",
    },
];

pub const EXPERIENCE: [Role; 5] = [
    Role {
        company: "Passageway",
        location: "Jaipur, India",
        title: "Lead Data Scientist",
        dates: "August 2024 - Present",
        description: "Architecting and deploying enterprise-scale data infrastructure and ML \
            systems for UPCL smart meter analytics, processing terabytes of data from 600,000+ \
            meters.\n\nKey project: redesigned the data architecture from a failing PostgreSQL \
            setup to a lakehouse on MinIO, Dremio and ClickHouse, with ML models for energy \
            forecasting and tampering detection.",
    },
    Role {
        company: "Xaigi Technology",
        location: "Noida, India",
        title: "Data Scientist | Gen AI Solution Architect",
        dates: "January 2024 - August 2024",
        description: "Led development of AI-driven solutions and agent-based systems, building \
            architectures on LLMs and multi-agent frameworks to automate financial workflows.\
            \n\nKey project: a multi-agent conversational AI system integrated with QuickBooks, \
            WooCommerce and Shopify, automating 90% of financial queries.",
    },
    Role {
        company: "Ericsson",
        location: "Noida, India",
        title: "Data Scientist",
        dates: "December 2021 - December 2023",
        description: "Developed machine learning and NLP solutions for telecom operations and \
            customer experience, from large-scale processing to production deployment.\n\nKey \
            project: a PySpark batch ETL pipeline on GCP processing ~1M rows every 15 minutes \
            with Argo Workflows.",
    },
    Role {
        company: "ATCS (Nagarro)",
        location: "Jaipur, India",
        title: "Data Scientist",
        dates: "July 2018 - November 2021",
        description: "Built predictive models to improve service operations and maintenance \
            workflows, and mentored junior team members.\n\nKey project: predictive maintenance \
            from telematics data, giving a 500% increase in service call volume and 2x \
            conversions.",
    },
    Role {
        company: "Bharat Sanchar Nigam Limited",
        location: "Gujarat, India",
        title: "Junior Telecom Officer (JTO)",
        dates: "May 2010 - June 2016",
        description: "Managed telecom operations and infrastructure across rural and urban \
            regions, including ERP-driven inventory operations.\n\nKey achievement: ran 12 rural \
            and 1 urban telephone exchanges with continuous service across the district.",
    },
];

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "Conversational AI for Finance | Multi-Agent Flow",
        category: "GenAI",
        description: "Designed and led development of a multi-agent conversational AI system \
            integrated with QuickBooks, WooCommerce, Shopify, and Authorize.net. Built 50+ \
            LangChain tools enabling 90% automation of financial queries.",
        tech: &["Python", "LangChain", "LangGraph", "GPT-4", "LlamaParser", "SQLAgent", "Vector DBs", "FastAPI"],
    },
    Project {
        title: "AI-Driven Merchant Onboarding Platform",
        category: "GenAI",
        description: "Generative AI-powered onboarding that streamlines merchant registration \
            across payment processors, cutting form-filling time from minutes to seconds with \
            intelligent autofill and adaptive question flows.",
        tech: &["Python", "LangChain", "FastAPI", "LlamaParser", "Pydantic", "GenAI"],
    },
    Project {
        title: "UPCL Smart Meter Analytics Platform",
        category: "Data Engineering",
        description: "Enterprise data lakehouse for 600k+ smart meters processing 8GB daily, \
            built on MinIO, Dremio and ClickHouse with ML models for energy forecasting and \
            tampering detection.",
        tech: &["Python", "ClickHouse", "MinIO", "Dremio", "Prefect", "PySpark", "ML"],
    },
    Project {
        title: "NPS-Based Topic Classification for Telecom",
        category: "ML & Analytics",
        description: "Topic classification over customer NPS feedback using LDA, with a \
            sentiment analysis pipeline and insights delivered through a Tableau dashboard.",
        tech: &["PySpark", "Python", "Argo-flow", "LDA", "Tableau", "NLP"],
    },
    Project {
        title: "Predictive Service Reminder System for VECV",
        category: "ML & Predictive Analytics",
        description: "Forecasts scheduled service intervals from historical telematics data and \
            automates calling lists, giving a 500% increase in service call volume and 2x \
            conversions.",
        tech: &["Python", "Z-score", "Docker", "Kubernetes", "ML"],
    },
    Project {
        title: "Repair Package Recommendation System for Daimler",
        category: "ML & NLP",
        description: "ML-driven recommendation engine suggesting repair packages from historical \
            claim data, reducing false claim submissions and speeding up claim clearance.",
        tech: &["Python", "NLP", "Machine Learning"],
    },
];

pub const CONTACT: ContactInfo = ContactInfo {
    email: "rkverma87@gmail.com",
    phone: "+91 7409210692",
    location: "India",
    linkedin: "https://www.linkedin.com/in/ravi-kumar-verma-16837734/",
    github: "https://github.com/rkvermaa",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_cuts_long_descriptions() {
        let project = PROJECTS[0];
        let excerpt = project.excerpt();
        assert!(excerpt.ends_with("..."));
        assert!(excerpt.chars().count() <= EXCERPT_CHARS + 3);
        assert!(project.description.starts_with(excerpt.trim_end_matches("...")));
    }

    #[test]
    fn excerpt_keeps_short_descriptions() {
        let project = Project {
            title: "t",
            category: "c",
            description: "short",
            tech: &[],
        };
        assert_eq!(project.excerpt(), "short");
    }

    #[test]
    fn excerpt_counts_chars_not_bytes() {
        let description: &'static str = Box::leak("é".repeat(150).into_boxed_str());
        let project = Project {
            title: "t",
            category: "c",
            description,
            tech: &[],
        };
        assert_eq!(project.excerpt(), format!("{}...", "é".repeat(100)));
    }

    #[test]
    fn card_tech_is_capped() {
        assert_eq!(PROJECTS[0].card_tech().len(), 4);
        assert_eq!(PROJECTS[5].card_tech(), ["Python", "NLP", "Machine Learning"]);
    }

    #[test]
    fn role_paragraphs_split_on_blank_lines() {
        for role in EXPERIENCE {
            let paragraphs: Vec<_> = role.paragraphs().collect();
            assert_eq!(paragraphs.len(), 2, "{}", role.company);
        }
    }

    #[test]
    fn contact_links() {
        assert_eq!(CONTACT.mailto(), "mailto:rkverma87@gmail.com");
        assert_eq!(CONTACT.tel(), "tel:+917409210692");
    }
}
