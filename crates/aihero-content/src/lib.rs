//! Static content tables for the AI HERO brochure.

use aihero_core::{
    Feature, FeatureIcon, NavItem, Pricing, Program, ProgramIcon, Route, Schedule, Stat,
    TeamMember, Testimonial, Video,
};

/// Heading and lead paragraph at the top of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIntro {
    pub heading: &'static str,
    pub lead: &'static str,
}

/// Navigation bar entries, one per route.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Bosh Sahifa",
        route: Route::Home,
    },
    NavItem {
        label: "Dasturlar",
        route: Route::Programs,
    },
    NavItem {
        label: "Afzalliklar",
        route: Route::Features,
    },
    NavItem {
        label: "Biz Haqimizda",
        route: Route::About,
    },
    NavItem {
        label: "Aloqa",
        route: Route::Contact,
    },
];

const STANDARD_SCHEDULE: Schedule = Schedule {
    expert: "Dushanba, Chorshanba, Juma (1.5 soat)",
    hobby: "Seshanba, Payshanba (1.5 soat)",
    duration: "3 oy (Maktablar uchun 1 yil)",
};

const STANDARD_PRICING: Pricing = Pricing {
    expert: "1,000,000 so'm/oy",
    hobby: "500,000 so'm/oy",
};

pub const PROGRAMS: [Program; 3] = [
    Program {
        id: "applied-ai",
        title: "Applied AI",
        subtitle: Some("Sun'iy Intellektni Amaliy Qo'llash"),
        description: "Eng so'nggi AI texnologiyalari: LLM, AI Agentlar va Generativ Media. Kelajak kasblari uchun amaliy ko'nikmalar.",
        details: &[
            "LLM: Gemini, ChatGPT, NotebookLM, Perplexity, AI Studio",
            "AI Image & Video: Midjourney, VEO3, SORA2, KLING 2.6, Hailuo",
            "AI Agent: Cursor, Windsurf, Replit Agent (Avtonom darslar)",
            "Avtomatlashtirish: n8n, Genspark, Skywork",
        ],
        tools: &[
            "Gemini",
            "ChatGPT",
            "Midjourney",
            "Cursor",
            "Windsurf",
            "VEO3",
            "n8n",
        ],
        schedule: Some(STANDARD_SCHEDULE),
        pricing: Some(STANDARD_PRICING),
        icon: ProgramIcon::Cpu,
    },
    Program {
        id: "robotics",
        title: "Robototexnika",
        subtitle: Some("Muhandislik va Dasturlash"),
        description: "Mexanika, Elektronika va Dasturlash uyg'unligi. Nazariya (30%) va Amaliyot (70%) balansi.",
        details: &[
            "Dasturlash: Arduino (C++), Python, Scratch, Algoritmlar",
            "Elektronika: Sensorlar, Motorlar, Sxemotexnika, Smart Home",
            "Mexanika: 3D modellashtirish, Robot harakati va muvozanat",
            "Loyiha: Line Tracer, Sumo Robot, Smart Car yasash",
        ],
        tools: &["Arduino", "Python", "C++", "Sensors", "Motors", "3D Print"],
        schedule: Some(STANDARD_SCHEDULE),
        pricing: Some(STANDARD_PRICING),
        icon: ProgramIcon::Bot,
    },
    Program {
        id: "korean",
        title: "Koreys Tili",
        subtitle: Some("Gyeongsangbuk-do Maxsus Dasturi"),
        description: "Janubiy Koreyada o'qish va ishlash imkoniyati (E-7 va D-2 vizalari). AI texnologiyalari yordamida tezkor til o'rganish.",
        details: &[
            "TOPIK I-II (1-2 daraja): 4 oy - Boshlang'ich",
            "TOPIK II (3-4 daraja): 4 oy - O'rta",
            "TOPIK II (5-6 daraja): 4 oy - Yuqori",
            "Native Professor tomonidan maxsus o'quv darslari",
        ],
        tools: &["AI Tutors", "TOPIK App", "VR Travel", "YouTube Review"],
        schedule: Some(Schedule {
            expert: "TOPIK 6 gacha to'liq tayyorgarlik",
            hobby: "Madaniyat va So'zlashuv",
            duration: "1 yil (To'liq kurs)",
        }),
        pricing: Some(Pricing {
            expert: "Shartnoma asosida",
            hobby: "Shartnoma asosida",
        }),
        icon: ProgramIcon::Languages,
    },
];

pub const FEATURES: [Feature; 4] = [
    Feature {
        id: "1",
        title: "Eng So'nggi Texnologiyalar",
        description: "Biz har oy dasturimizni yangilaymiz. O'quvchilar Cursor, Windsurf va Gemini kabi eng yangi AI vositalarida ishlashni o'rganadilar.",
        icon: FeatureIcon::Zap,
    },
    Feature {
        id: "2",
        title: "Amaliyotga Yo'naltirilgan",
        description: "Robototexnikada 70% amaliyot, 30% nazariya. Applied AI kursida haqiqiy agentlar va loyihalar yaratiladi.",
        icon: FeatureIcon::Rocket,
    },
    Feature {
        id: "3",
        title: "Koreya Davlat Dasturi",
        description: "Gyeongsangbuk-do viloyati bilan hamkorlikda E-7 (ishchi) va D-2 (talaba) vizalari uchun rasmiy ko'mak.",
        icon: FeatureIcon::Award,
    },
    Feature {
        id: "4",
        title: "AI Yordamida Til O'rganish",
        description: "Zerikarli darslar yo'q! AI tomonidan yaratilgan vizual kontent va maxsus ilovalar orqali Koreys tilini tez o'rganing.",
        icon: FeatureIcon::Brain,
    },
];

pub const STATS: [Stat; 3] = [
    Stat {
        label: "O'quvchi Natijasi",
        value: "Top 10",
        suffix: "%",
    },
    Stat {
        label: "Grant Yutganlar",
        value: "100",
        suffix: "+",
    },
    Stat {
        label: "AI Loyihalar",
        value: "100",
        suffix: "+",
    },
];

pub const TEAM: [TeamMember; 9] = [
    TeamMember {
        id: "1",
        name: "Prof. Kim",
        role: "General Director",
        specialty: Some("Applied AI Expert"),
    },
    TeamMember {
        id: "2",
        name: "Prof. Hwang",
        role: "Senior Korean Instructor",
        specialty: Some("Academic Korean Expert"),
    },
    TeamMember {
        id: "4",
        name: "Diyor",
        role: "Robototexnika Director",
        specialty: Some("Arduino & IoT Specialist"),
    },
    TeamMember {
        id: "3",
        name: "Muhammad",
        role: "Full-Stack AI Developer",
        specialty: Some("Coding & AI Agent Expert"),
    },
    TeamMember {
        id: "5",
        name: "Oydinoy",
        role: "AI Image & Video Instructor",
        specialty: Some("AI Creative Video Expert"),
    },
    TeamMember {
        id: "6",
        name: "Nodirbek",
        role: "AI Image & Video Instructor",
        specialty: Some("AI Creative Video Expert"),
    },
    TeamMember {
        id: "7",
        name: "Mirolim",
        role: "Senior Korean Instructor",
        specialty: Some("Korean Expert & Visa Advisor"),
    },
    TeamMember {
        id: "8",
        name: "Nargiza",
        role: "Senior Korean Instructor",
        specialty: Some("Academic Korean Expert"),
    },
    TeamMember {
        id: "9",
        name: "Sevinchi",
        role: "O'quv Ishlari Menejeri",
        specialty: Some("Student Success Coordinator"),
    },
];

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        id: "1",
        name: "Dilshod Raximov",
        role: "34-Maktab Direktori",
        content: "AI HERO jamoasi maktabimizda haqiqiy innovatsion muhit yaratdi. O'quvchilarimiz hozirda o'z startaplarini yaratish ustida ishlamoqda.",
    },
    Testimonial {
        id: "2",
        name: "Malika Karimova",
        role: "O'quvchi Onasi",
        content: "O'g'lim ilgari o'qishga qiziqmas edi. Robototexnika kursidan keyin uning ko'zlarida olov ko'rdim. Rahmat sizlarga!",
    },
    Testimonial {
        id: "3",
        name: "Jasur Aliyev",
        role: "Grant G'olibi (Sejong Univ)",
        content: "Koreys tili va AI kurslari yordamida men Koreyaning nufuzli universitetiga 100% grant yutib oldim. Bu men uchun orzu edi.",
    },
    Testimonial {
        id: "4",
        name: "Shahnoza opa",
        role: "Informatika O'qituvchisi",
        content: "AI vositalari (Gemini, ChatGPT) dars o'tishimni 10 barobar osonlashtirdi. Endi o'quvchilarim zerikmaydi.",
    },
];

pub const VIDEOS: [Video; 4] = [
    Video {
        id: "1",
        title: "AI HERO: Kelajak Ta'limi Taqdimoti",
        duration: "2:45",
        url: "https://www.youtube.com/embed/r-nq5Y-YsNQ",
    },
    Video {
        id: "2",
        title: "The Four Seasons of Emotions",
        duration: "1:01",
        url: "https://www.youtube.com/shorts/6hxGv7DjkuI",
    },
    Video {
        id: "3",
        title: "Black Bull",
        duration: "34s",
        url: "https://www.youtube.com/shorts/a6QXwVGxWCc",
    },
    Video {
        id: "4",
        title: "One-piece Jonli harakat",
        duration: "37s",
        url: "https://www.youtube.com/shorts/4nF9pvcNfTA",
    },
];

pub const YOUTUBE_CHANNEL: &str = "https://www.youtube.com/@aiherouz";

/// Page intros keyed by route.
pub fn intro(route: Route) -> PageIntro {
    match route {
        Route::Home => PageIntro {
            heading: "KELAJAK TA'LIMI SIZNING MAKTABDA",
            lead: "AI HERO maktabingizga AI Agentlar, zamonaviy Robototexnika va Koreys tilini taqdim etadi.",
        },
        Route::Programs => PageIntro {
            heading: "Bizning O'quv Dasturlarimiz",
            lead: "Maktab o'quvchilari uchun maxsus ishlab chiqilgan, xalqaro bozor talablariga javob beradigan professional kurslar.",
        },
        Route::Features => PageIntro {
            heading: "AFZALLIKLARIMIZ",
            lead: "AI HERO loyihasining boshqalardan farq qiladigan asosiy jihatlari va o'quvchilarga beradigan imkoniyatlari.",
        },
        Route::About => PageIntro {
            heading: "BIZNING HIKOYAMIZ",
            lead: "AI HERO — Biznesingiz uchun sun'iy intellekt imkoniyatlarini ochadi.",
        },
        Route::Contact => PageIntro {
            heading: "Hamkorlik Arizasi",
            lead: "Maktabingizga AI HERO dasturlarini olib kirish uchun ariza qoldiring.",
        },
    }
}

/// Reasons to choose the school, shown on the home page.
pub const HIGHLIGHTS: [&str; 3] = [
    "Eng so'nggi o'quv metodikalari",
    "Xalqaro sertifikat va diplomlar",
    "Koreya universitetida o'qish imkoniyati",
];

pub const CONTACT_PHONE: &str = "+998 90 123 45 67";
pub const CONTACT_EMAIL: &str = "aihero.uz@gmail.com";
pub const CONTACT_ADDRESS: &str = "Toshkent sh, AKITA University 204-xona";

/// Look up a program by its id.
pub fn program(id: &str) -> Option<&'static Program> {
    PROGRAMS.iter().find(|p| p.id == id)
}
