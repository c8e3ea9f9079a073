use crate::content::dashboard::METRIC_COUNT;
use crate::content::facilities::FACILITY_COUNT;
use crate::content::stats::STAT_COUNT;
use crate::content::timeline::{NEWS_COUNT, PHASE_COUNT};

/// Every piece of visible text on the page, for one language
///
/// Strings are stored raw and unescaped; the renderer escapes them for HTML.
/// Fixed-length lists share their length with the display records in
/// `crate::content`, so a locale can never miss an entry.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    pub brand: BrandStrings,
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub stats: StatsStrings,
    pub about: AboutStrings,
    pub factories: FactoriesStrings,
    pub timeline: TimelineStrings,
    pub dashboard: DashboardStrings,
    pub contact: ContactStrings,
    pub footer: FooterStrings,
    pub modal: ModalStrings,
    pub news: [NewsStrings; NEWS_COUNT],
}

#[derive(Debug, Clone)]
pub struct BrandStrings {
    /// Brand name as written in running text (e.g., "Everwin")
    pub name: &'static str,
    /// Logo wordmark, kept in Latin script for every locale
    pub wordmark: &'static str,
    pub wordmark_sub: &'static str,
    pub logo_alt: &'static str,
}

#[derive(Debug, Clone)]
pub struct NavStrings {
    pub about: &'static str,
    pub factories: &'static str,
    pub timeline: &'static str,
    pub contact: &'static str,
    /// Label of the language toggle, written in the *other* language
    pub language_switch: &'static str,
    pub open_menu: &'static str,
    pub close_menu: &'static str,
    pub back_to_top: &'static str,
}

#[derive(Debug, Clone)]
pub struct HeroStrings {
    pub group: &'static str,
    /// Full title, also used as the document title
    pub title: &'static str,
    pub title_lead: &'static str,
    pub title_accent: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
}

#[derive(Debug, Clone)]
pub struct StatsStrings {
    pub labels: [&'static str; STAT_COUNT],
}

#[derive(Debug, Clone)]
pub struct AboutStrings {
    pub title: &'static str,
    pub text1: &'static str,
    pub text2: &'static str,
    pub open_map: &'static str,
    pub map_title: &'static str,
}

#[derive(Debug, Clone)]
pub struct FactoriesStrings {
    pub label: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub names: [&'static str; FACILITY_COUNT],
}

#[derive(Debug, Clone)]
pub struct TimelineStrings {
    pub title: &'static str,
    pub desc: &'static str,
    pub phases: [&'static str; PHASE_COUNT],
    pub view_news: &'static str,
}

#[derive(Debug, Clone)]
pub struct DashboardStrings {
    pub live_feed: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub schedule_start: &'static str,
    pub schedule_end: &'static str,
    pub phase_status: &'static str,
    pub on_track: &'static str,
    pub zone_title: &'static str,
    pub live: &'static str,
    pub capacity: &'static str,
    pub reserve: &'static str,
    pub metrics: [&'static str; METRIC_COUNT],
}

#[derive(Debug, Clone)]
pub struct ContactStrings {
    pub title: &'static str,
    pub desc: &'static str,
    pub location: &'static str,
    pub open_maps: &'static str,
    /// Link text for the industrial cities authority
    pub authority: &'static str,
}

#[derive(Debug, Clone)]
pub struct FooterStrings {
    pub company: &'static str,
    pub group: &'static str,
    pub address: &'static str,
    pub cr: &'static str,
    /// Placeholders: {year}
    pub copyright: &'static str,
}

#[derive(Debug, Clone)]
pub struct ModalStrings {
    pub close: &'static str,
    /// Placeholders: {n}
    pub photo_alt: &'static str,
}

#[derive(Debug, Clone)]
pub struct NewsStrings {
    pub title: &'static str,
    /// Paragraphs are separated by a blank line
    pub body: &'static str,
}

impl LanguageStrings {
    /// Every field of the dictionary as `(path, value)` pairs.
    ///
    /// Paths are dot-separated; list entries use their index as the last
    /// segment (e.g. `factories.names.0`). The order is stable across
    /// languages, which is what the completeness check relies on.
    pub fn entries(&self) -> Vec<(String, &'static str)> {
        let mut out: Vec<(String, &'static str)> = Vec::with_capacity(96);
        let mut field = |path: &str, value: &'static str| out.push((path.to_string(), value));

        field("brand.name", self.brand.name);
        field("brand.wordmark", self.brand.wordmark);
        field("brand.wordmark_sub", self.brand.wordmark_sub);
        field("brand.logo_alt", self.brand.logo_alt);

        field("nav.about", self.nav.about);
        field("nav.factories", self.nav.factories);
        field("nav.timeline", self.nav.timeline);
        field("nav.contact", self.nav.contact);
        field("nav.language_switch", self.nav.language_switch);
        field("nav.open_menu", self.nav.open_menu);
        field("nav.close_menu", self.nav.close_menu);
        field("nav.back_to_top", self.nav.back_to_top);

        field("hero.group", self.hero.group);
        field("hero.title", self.hero.title);
        field("hero.title_lead", self.hero.title_lead);
        field("hero.title_accent", self.hero.title_accent);
        field("hero.subtitle", self.hero.subtitle);
        field("hero.cta", self.hero.cta);

        for (i, label) in self.stats.labels.iter().enumerate() {
            field(&format!("stats.labels.{}", i), *label);
        }

        field("about.title", self.about.title);
        field("about.text1", self.about.text1);
        field("about.text2", self.about.text2);
        field("about.open_map", self.about.open_map);
        field("about.map_title", self.about.map_title);

        field("factories.label", self.factories.label);
        field("factories.title", self.factories.title);
        field("factories.desc", self.factories.desc);
        for (i, name) in self.factories.names.iter().enumerate() {
            field(&format!("factories.names.{}", i), *name);
        }

        field("timeline.title", self.timeline.title);
        field("timeline.desc", self.timeline.desc);
        for (i, phase) in self.timeline.phases.iter().enumerate() {
            field(&format!("timeline.phases.{}", i), *phase);
        }
        field("timeline.view_news", self.timeline.view_news);

        field("dashboard.live_feed", self.dashboard.live_feed);
        field("dashboard.title", self.dashboard.title);
        field("dashboard.desc", self.dashboard.desc);
        field("dashboard.schedule_start", self.dashboard.schedule_start);
        field("dashboard.schedule_end", self.dashboard.schedule_end);
        field("dashboard.phase_status", self.dashboard.phase_status);
        field("dashboard.on_track", self.dashboard.on_track);
        field("dashboard.zone_title", self.dashboard.zone_title);
        field("dashboard.live", self.dashboard.live);
        field("dashboard.capacity", self.dashboard.capacity);
        field("dashboard.reserve", self.dashboard.reserve);
        for (i, metric) in self.dashboard.metrics.iter().enumerate() {
            field(&format!("dashboard.metrics.{}", i), *metric);
        }

        field("contact.title", self.contact.title);
        field("contact.desc", self.contact.desc);
        field("contact.location", self.contact.location);
        field("contact.open_maps", self.contact.open_maps);
        field("contact.authority", self.contact.authority);

        field("footer.company", self.footer.company);
        field("footer.group", self.footer.group);
        field("footer.address", self.footer.address);
        field("footer.cr", self.footer.cr);
        field("footer.copyright", self.footer.copyright);

        field("modal.close", self.modal.close);
        field("modal.photo_alt", self.modal.photo_alt);

        for (i, news) in self.news.iter().enumerate() {
            field(&format!("news.{}.title", i), news.title);
            field(&format!("news.{}.body", i), news.body);
        }

        out
    }

    /// Look up a single field by its path (see [`LanguageStrings::entries`]).
    pub fn lookup(&self, path: &str) -> Option<&'static str> {
        self.entries()
            .into_iter()
            .find(|(p, _)| p == path)
            .map(|(_, value)| value)
    }
}

// ==================== English Strings ====================

/// English, the authoring language
pub static ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    brand: BrandStrings {
        name: "Everwin",
        wordmark: "EVERWIN",
        wordmark_sub: "INDUSTRIAL PARK",
        logo_alt: "Everwin Logo",
    },

    nav: NavStrings {
        about: "Overview",
        factories: "Factories",
        timeline: "Timeline",
        contact: "Contact",
        language_switch: "العربية",
        open_menu: "Open menu",
        close_menu: "Close menu",
        back_to_top: "Back to top",
    },

    hero: HeroStrings {
        group: "Part of Wangkang Group",
        title: "Everwin Industrial Park",
        title_lead: "Everwin",
        title_accent: "Industrial Park",
        subtitle: "A strategic manufacturing hub in Dammam 3rd Industrial City. Empowering local content, driving global exports.",
        cta: "Explore Facilities",
    },

    stats: StatsStrings {
        labels: [
            "Total Area",
            "Total Investment",
            "Annual Output",
            "Jobs Created",
            "Export Target",
            "Manufacturing Plants",
        ],
    },

    about: AboutStrings {
        title: "Strategic Investment",
        text1: "Everwin Industrial Park is a flagship project under the Wangkang Group ecosystem. Located in Dammam 3rd Industrial City, it spans nearly 2 million square meters, representing a direct contribution to Saudi Vision 2030 by localizing advanced manufacturing and boosting non-oil exports.",
        text2: "With a total investment exceeding 5 Billion SAR, the park integrates 7 specialized factories, including aluminum extrusion, steel structures and glass processing, alongside modern accommodation and administrative facilities. We project over 30% of our output will be exported globally.",
        open_map: "Open Location Map",
        map_title: "Map of Dammam 3rd Industrial City",
    },

    factories: FactoriesStrings {
        label: "The Master Plan",
        title: "Integrated Manufacturing Ecosystem",
        desc: "Our comprehensive layout includes specialized zones for heavy and light industries, fully interconnected for efficiency.",
        names: [
            "Aluminum Profile",
            "Steel Structure",
            "Glass Processing",
            "Aluminum Windows",
            "Sanitary Ware",
            "Ceramic Frit",
            "Tissue Paper",
            "Accommodation",
        ],
    },

    timeline: TimelineStrings {
        title: "Construction Roadmap",
        desc: "We are moving swiftly from groundbreaking to full operational capacity.",
        phases: [
            "Construction Started",
            "Phase 1 Completion",
            "Phase 2 Completion",
        ],
        view_news: "View Ceremony",
    },

    dashboard: DashboardStrings {
        live_feed: "Live Construction Feed",
        title: "Development Progress",
        desc: "Tracking real-time milestones from groundbreaking to full operational capacity.",
        schedule_start: "Start Q4 2025",
        schedule_end: "Phase 2: 2030",
        phase_status: "Phase 1 Status",
        on_track: "On Track: Q4 2025 Launch",
        zone_title: "Zone Allocation",
        live: "LIVE",
        capacity: "35% Capacity Secured",
        reserve: "Reserve Your Spot",
        metrics: [
            "Land Leveling",
            "Road Network",
            "Power Grid",
            "Natural Gas",
            "Water Systems",
            "Tenant Occupancy",
            "Accommodation",
        ],
    },

    contact: ContactStrings {
        title: "Get in Touch",
        desc: "For business inquiries and partnership opportunities.",
        location: "Location",
        open_maps: "Open Maps",
        authority: "Saudi Authority for Industrial Cities (MODON)",
    },

    footer: FooterStrings {
        company: "Everwin Property Company",
        group: "Part of Wangkang Group",
        address: "Dammam 3rd Industrial City, Saudi Arabia",
        cr: "CR: 2050164356241",
        copyright: "© {year} Everwin Property Company. All rights reserved.",
    },

    modal: ModalStrings {
        close: "Close",
        photo_alt: "Event photo {n}",
    },

    news: [NewsStrings {
        title: "Official Signing Ceremony with Modon at 21st UNIDO Event",
        body: "Accompanied by auspicious multicolored clouds, the 1.8 million square meter Wangkang Group Dammam Everwin Industrial Park was officially signed and finalized with Modon at the 21st UNIDO Event, witnessed by two honorable ministers from the Saudi Ministry of Industry and Mineral Resources. With a total investment of approximately 5 billion riyals, the project will develop a comprehensive building-materials industrial park in Dammam, featuring eight major factories, including the Middle East's largest aluminum profiles, sanitary ware, papermaking and steel structure facilities.\n\n\
Advancing cooperation through practicality and demonstrating strength through concrete projects, China and Saudi Arabia are working hand in hand to open a new chapter. ✨",
    }],
};

// ==================== Arabic Strings ====================

/// Arabic language strings
pub static ARABIC_STRINGS: LanguageStrings = LanguageStrings {
    brand: BrandStrings {
        name: "إيفروين",
        wordmark: "EVERWIN",
        wordmark_sub: "INDUSTRIAL PARK",
        logo_alt: "شعار إيفروين",
    },

    nav: NavStrings {
        about: "نبذة عامة",
        factories: "المصانع",
        timeline: "الجدول الزمني",
        contact: "تواصل معنا",
        language_switch: "English",
        open_menu: "فتح القائمة",
        close_menu: "إغلاق القائمة",
        back_to_top: "العودة إلى الأعلى",
    },

    hero: HeroStrings {
        group: "إحدى شركات مجموعة وان كانغ",
        title: "مجمع إيفروين الصناعي",
        title_lead: "إيفروين",
        title_accent: "المجمع الصناعي",
        subtitle: "مركز صناعي استراتيجي في المدينة الصناعية الثالثة بالدمام. ندعم المحتوى المحلي ونقود الصادرات العالمية.",
        cta: "اكتشف المرافق",
    },

    stats: StatsStrings {
        labels: [
            "المساحة الإجمالية",
            "إجمالي الاستثمار",
            "الإنتاج السنوي",
            "فرص وظيفية",
            "حجم التصدير المتوقع",
            "مصانع إنتاجية",
        ],
    },

    about: AboutStrings {
        title: "استثمار استراتيجي",
        text1: "يعد مجمع إيفروين الصناعي مشروعاً رائداً تحت مظلة مجموعة وان كانغ. يقع المشروع في المدينة الصناعية الثالثة بالدمام على مساحة تقارب 2 مليون متر مربع، ويمثل مساهمة مباشرة في رؤية المملكة 2030 من خلال توطين الصناعات المتقدمة وتعزيز الصادرات غير النفطية.",
        text2: "بإجمالي استثمارات تتجاوز 5 مليارات ريال سعودي، يضم المجمع 7 مصانع متخصصة تشمل سحب الألمنيوم والهياكل الفولاذية ومعالجة الزجاج، بالإضافة إلى مرافق سكنية وإدارية حديثة. نتوقع تصدير أكثر من 30% من إنتاجنا إلى الأسواق العالمية.",
        open_map: "فتح الخريطة",
        map_title: "خريطة المدينة الصناعية الثالثة بالدمام",
    },

    factories: FactoriesStrings {
        label: "المخطط العام",
        title: "نظام بيئي صناعي متكامل",
        desc: "يشمل مخططنا الشامل مناطق متخصصة للصناعات الثقيلة والخفيفة، مترابطة بالكامل لتحقيق الكفاءة.",
        names: [
            "مقاطع الألمنيوم",
            "الهياكل الفولاذية",
            "معالجة الزجاج والأثاث",
            "نوافذ وأبواب الألمنيوم",
            "الأدوات الصحية",
            "فريت السيراميك",
            "الورق الصحي والغذائي",
            "سكن الموظفين والمكاتب",
        ],
    },

    timeline: TimelineStrings {
        title: "خارطة الطريق",
        desc: "نتحرك بخطى ثابتة من وضع حجر الأساس إلى التشغيل الكامل.",
        phases: [
            "بدء أعمال الإنشاء",
            "اكتمال المرحلة الأولى",
            "اكتمال المرحلة الثانية",
        ],
        view_news: "صور الحفل",
    },

    dashboard: DashboardStrings {
        live_feed: "بث مباشر لحالة الإنشاء",
        title: "سير العمل في المشروع",
        desc: "متابعة المعالم الرئيسية للمشروع في الوقت الفعلي من وضع حجر الأساس إلى التشغيل الكامل.",
        schedule_start: "البداية الربع الرابع 2025",
        schedule_end: "المرحلة الثانية: 2030",
        phase_status: "حالة المرحلة 1",
        on_track: "حسب الجدول: الربع الرابع 2025",
        zone_title: "توزيع المناطق",
        live: "مباشر",
        capacity: "تم تأمين 35% من السعة",
        reserve: "احجز موقعك",
        metrics: [
            "تسوية الأراضي",
            "شبكة الطرق",
            "الكهرباء",
            "الغاز الطبيعي",
            "المياه",
            "نسبة الإشغال",
            "السكن والمرافق",
        ],
    },

    contact: ContactStrings {
        title: "تواصل معنا",
        desc: "للاستفسارات التجارية وفرص الشراكة.",
        location: "الموقع",
        open_maps: "فتح الخرائط",
        authority: "الهيئة السعودية للمدن الصناعية ومناطق التقنية (مدن)",
    },

    footer: FooterStrings {
        company: "شركة الازدهار الأبدي للعقارات",
        group: "إحدى شركات مجموعة وان كانغ",
        address: "المدينة الصناعية الثالثة، الدمام، المملكة العربية السعودية",
        cr: "سجل تجاري: 2050164356241",
        copyright: "© {year} شركة الازدهار الأبدي للعقارات. جميع الحقوق محفوظة.",
    },

    modal: ModalStrings {
        close: "إغلاق",
        photo_alt: "صورة من الحفل {n}",
    },

    news: [NewsStrings {
        title: "حفل التوقيع الرسمي مع مدن في حدث اليونيدو الحادي والعشرين",
        body: "وسط أجواء احتفالية، تم التوقيع الرسمي والانتهاء من إجراءات مجمع إيفروين الصناعي التابع لمجموعة وان كانغ في الدمام، والذي تبلغ مساحته 1.8 مليون متر مربع، مع هيئة مدن (MODON) خلال فعاليات الدورة الحادية والعشرين لليونيدو، وبحضور وزيرين من وزارة الصناعة والثروة المعدنية السعودية. باستثمار إجمالي يقارب 5 مليارات ريال، سيتم تطوير مجمع صناعي شامل لمواد البناء في الدمام، يضم ثمانية مصانع رئيسية تشمل أكبر مصانع مقاطع الألمنيوم والأدوات الصحية وصناعة الورق والهياكل الفولاذية في الشرق الأوسط.\n\n\
من خلال تعزيز التعاون عبر الخطوات العملية وإثبات القوة من خلال المشاريع الملموسة، تعمل الصين والمملكة العربية السعودية يداً بيد لفتح فصل جديد. ✨",
    }],
};
