//! Built-in offline name table, keyed by country in display order.

pub static NAMES_BY_COUNTRY: &[(&str, &[&str])] = &[
    (
        "Australia",
        &[
            "Liam Mitchell", "Olivia Harrison", "Noah Fitzgerald", "Charlotte Kelly",
            "Jack Thompson", "Mia Sullivan", "William Brennan", "Isla Hughes",
            "Oliver Donnelly", "Amelia Walsh", "Lachlan Murray", "Matilda Pearce",
        ],
    ),
    (
        "United States",
        &[
            "James Carter", "Emma Rodriguez", "Benjamin Hayes", "Ava Coleman",
            "Lucas Bennett", "Sophia Ramirez", "Henry Brooks", "Harper Jenkins",
            "Mason Price", "Evelyn Foster", "Ethan Sanders", "Abigail Russell",
        ],
    ),
    (
        "United Kingdom",
        &[
            "George Whitfield", "Poppy Ashworth", "Harry Pemberton", "Florence Hale",
            "Oscar Thornton", "Ivy Rowley", "Arthur Langley", "Daisy Kendall",
            "Theo Aldridge", "Rosie Blackwood", "Alfie Marsh", "Evie Carrington",
        ],
    ),
    (
        "Canada",
        &[
            "Logan Tremblay", "Chloe Gagnon", "Nathan Roy", "Zoe Bouchard",
            "Ryan Fortin", "Maya Lavoie", "Owen Gauthier", "Leah Morin",
            "Caleb Pelletier", "Hannah Bélanger", "Dylan Côté", "Avery Leblanc",
        ],
    ),
    (
        "Germany",
        &[
            "Lukas Schneider", "Hannah Fischer", "Felix Weber", "Lea Wagner",
            "Jonas Becker", "Emilia Hoffmann", "Leon Schulz", "Marie Koch",
            "Paul Richter", "Sophie Klein", "Finn Wolf", "Lina Schröder",
        ],
    ),
    (
        "France",
        &[
            "Gabriel Martin", "Louise Bernard", "Raphaël Dubois", "Jade Thomas",
            "Arthur Robert", "Chloé Richard", "Louis Petit", "Inès Durand",
            "Jules Leroy", "Manon Moreau", "Hugo Simon", "Camille Laurent",
        ],
    ),
    (
        "Brazil",
        &[
            "Miguel Silva", "Helena Santos", "Arthur Oliveira", "Alice Souza",
            "Heitor Pereira", "Laura Lima", "Davi Carvalho", "Manuela Ferreira",
            "Bernardo Almeida", "Valentina Costa", "Théo Ribeiro", "Sophia Gomes",
        ],
    ),
    (
        "Japan",
        &[
            "Haruto Sato", "Yui Suzuki", "Sota Takahashi", "Himari Tanaka",
            "Yuto Watanabe", "Mei Ito", "Riku Yamamoto", "Aoi Nakamura",
            "Minato Kobayashi", "Sakura Kato", "Ren Yoshida", "Hina Yamada",
        ],
    ),
    (
        "India",
        &[
            "Aarav Sharma", "Ananya Patel", "Vihaan Gupta", "Diya Reddy",
            "Arjun Nair", "Saanvi Iyer", "Reyansh Mehta", "Aadhya Kapoor",
            "Vivaan Joshi", "Ishita Rao", "Kabir Malhotra", "Myra Verma",
        ],
    ),
    (
        "Nigeria",
        &[
            "Chinedu Okafor", "Amara Eze", "Tunde Adeyemi", "Ngozi Okonkwo",
            "Emeka Nwosu", "Funke Balogun", "Ifeanyi Obi", "Zainab Bello",
            "Segun Afolabi", "Chioma Uche", "Kelechi Onyeka", "Halima Musa",
        ],
    ),
];
