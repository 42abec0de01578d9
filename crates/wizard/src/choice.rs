//! Typed option sets for every multiple-choice question the wizard asks.
//!
//! Each enum carries its prompt and the exact option labels shown to the
//! operator. The label is what gets recorded; the variant is what selects
//! advice.

use crate::prompt::Question;

/// A closed set of options for one question.
pub trait Choice: Copy + Eq + Sized + 'static {
    const PROMPT: &'static str;
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    /// The listed options followed by "Other (specify)".
    fn question() -> Question {
        Question::choice(Self::PROMPT, Self::ALL.iter().map(|c| c.label()))
    }

    /// Exact label lookup.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

/// An answer to a [`Choice`] question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<C> {
    Listed(C),
    Custom(String),
}

impl<C: Choice> Answer<C> {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Listed(c) => c.label(),
            Self::Custom(text) => text,
        }
    }

    pub fn listed(&self) -> Option<C> {
        match self {
            Self::Listed(c) => Some(*c),
            Self::Custom(_) => None,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Listed(c) => c.label().to_string(),
            Self::Custom(text) => text,
        }
    }
}

macro_rules! choice {
    (
        $(#[$meta:meta])*
        $name:ident: $prompt:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Choice for $name {
            const PROMPT: &'static str = $prompt;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }
    };
}

choice! {
    Familiarity: "How familiar are you with the current frontend data flow?" {
        VeryFamiliar => "Very familiar - I built it",
        Somewhat => "Somewhat familiar - I've reviewed the code",
        NotFamiliar => "Not familiar - I'm new to this project",
    }
}

choice! {
    Framework: "Which backend framework would you prefer?" {
        FastApi => "FastAPI (Python) - High performance, automatic API docs",
        Flask => "Flask (Python) - Lightweight, flexible, great for MVPs",
        Express => "Node.js (Express) - JavaScript full-stack, familiar syntax",
        Django => "Django (Python) - Full-featured, built-in admin, ORM",
    }
}

impl Framework {
    /// Short name the labels start with.
    pub fn name(self) -> &'static str {
        match self {
            Self::FastApi => "FastAPI",
            Self::Flask => "Flask",
            Self::Express => "Node.js",
            Self::Django => "Django",
        }
    }

    /// Recognise a recorded answer by the first framework name it mentions,
    /// checked in listing order.
    ///
    /// Works for listed labels and for free text such as `"Python FastAPI service"`.
    pub fn recognize(answer: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| answer.contains(f.name()))
    }
}

choice! {
    Experience: "What's your experience level with this framework?" {
        Expert => "Expert - I've built production applications",
        Intermediate => "Intermediate - I've built some projects",
        Beginner => "Beginner - I'm learning or new to it",
    }
}

choice! {
    LlmChoice: "Which LLM approach interests you most?" {
        Mistral => "Mistral 7B (Local) - Privacy-focused, no API costs",
        OpenAi => "OpenAI GPT (API) - Powerful, easy to integrate",
        Claude => "Anthropic Claude (API) - Strong reasoning, safety-focused",
        HuggingFace => "Hugging Face Models - Open source, customizable",
    }
}

choice! {
    VectorDb: "Which vector database would you prefer?" {
        Faiss => "Faiss (Facebook) - Fast, local, good for prototypes",
        Pinecone => "Pinecone - Managed, scalable, easy to use",
        Weaviate => "Weaviate - Open source, GraphQL API",
        Chroma => "Chroma - Simple, local-first, Python-friendly",
    }
}

choice! {
    DataSource: "What's your primary data source for insurance information?" {
        InsurerApis => "Insurance company APIs - Real-time policy data",
        StaticDatasets => "Static datasets - CSV/JSON files with policy info",
        ManualCuration => "Manual curation - Build your own policy database",
        Aggregators => "Third-party services - Insurance aggregator APIs",
    }
}

choice! {
    Complexity: "How complex should your initial data model be?" {
        Simple => "Simple - Basic plans with premium ranges",
        Moderate => "Moderate - Multiple coverage types and tiers",
        Complex => "Complex - Detailed underwriting and calculations",
    }
}

impl Complexity {
    pub fn name(self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Moderate => "Moderate",
            Self::Complex => "Complex",
        }
    }
}

choice! {
    ApiStyle: "What API style do you prefer?" {
        Rest => "REST - Simple, widely supported",
        GraphQl => "GraphQL - Flexible queries, single endpoint",
        OpenApi => "FastAPI/OpenAPI - Auto-generated docs, type safety",
    }
}

choice! {
    Realtime: "Do you need real-time features?" {
        WebSocket => "Yes - WebSocket for live chat",
        ServerSentEvents => "Yes - Server-sent events for updates",
        PlainHttp => "No - Standard HTTP requests are fine",
    }
}

choice! {
    AuthType: "What authentication approach do you need?" {
        Anonymous => "None - Anonymous quotes (simplest start)",
        Basic => "Basic - Email/password registration",
        OAuth => "OAuth - Google/Facebook login",
        Enterprise => "Enterprise - SAML/LDAP integration",
    }
}

choice! {
    PrivacyLevel: "How sensitive is the health data you'll handle?" {
        Low => "Low - General health questions only",
        Medium => "Medium - Some medical history",
        High => "High - Detailed medical records (HIPAA compliance needed)",
    }
}

choice! {
    Platform: "Where would you like to deploy?" {
        Local => "Local development - Docker Compose",
        Cloud => "Cloud platform - AWS/GCP/Azure",
        Paas => "PaaS solution - Heroku/Railway/Render",
        Serverless => "Serverless - AWS Lambda/Vercel Functions",
    }
}

choice! {
    Scale: "What's your expected initial scale?" {
        Small => "Small - <100 users/day",
        Medium => "Medium - 100-1000 users/day",
        Large => "Large - 1000+ users/day",
    }
}

choice! {
    HttpClient: "How should we handle API communication?" {
        Axios => "Axios (already used) - HTTP client library",
        Fetch => "Fetch API - Native browser API",
        TanStackQuery => "TanStack Query - Advanced caching and sync",
        CustomWrapper => "Custom wrapper - Tailored to your needs",
    }
}

choice! {
    ErrorHandling: "How comprehensive should error handling be?" {
        Basic => "Basic - Simple try/catch blocks",
        Intermediate => "Intermediate - User-friendly error messages",
        Advanced => "Advanced - Retry logic, fallbacks, monitoring",
    }
}

choice! {
    /// Asked between steps.
    Continue: "Ready to continue to the next step?" {
        Yes => "Yes, continue",
        Review => "No, let me review this step",
    }
}
