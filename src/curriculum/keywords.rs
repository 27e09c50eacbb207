// 科目ごとの関連キーワード（カリキュラム表に単元が無い場合の判定用）

pub(super) static KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Mathematics",
        &[
            "number", "numbers", "counting", "addition", "subtraction", "multiplication",
            "division", "place value", "tens", "hundreds", "thousands", "digit", "digits", "even",
            "odd", "pattern", "patterns", "shapes", "triangle", "square", "rectangle", "circle",
            "measurement", "length", "weight", "time", "money", "coins", "notes", "fraction",
            "fractions", "decimal", "decimals", "percentage", "percentages", "ratio", "ratios",
            "proportion", "proportions", "algebra", "equation", "equations", "variable",
            "variables", "expression", "expressions", "coefficient", "coefficients", "geometry",
            "angle", "angles", "parallel", "perpendicular", "area", "perimeter", "volume",
            "surface area", "coordinate", "coordinates", "graph", "graphs", "integer", "integers",
            "positive", "negative", "absolute value", "quadratic", "polynomial", "polynomials",
            "function", "functions", "domain", "range", "linear", "slope", "intercept",
            "simultaneous", "inequality", "inequalities", "trigonometry", "sine", "cosine",
            "tangent", "theorem", "theorems", "proof", "proofs", "calculus", "derivative",
            "derivatives", "integral", "integrals", "limit", "limits", "statistics", "probability",
            "mean", "median", "mode", "standard deviation", "matrix", "matrices", "determinant",
            "determinants", "vector", "vectors", "logarithm", "logarithms", "exponential",
            "complex numbers", "binomial",
        ],
    ),
    (
        "Science",
        &[
            "matter", "states of matter", "solid", "liquid", "gas", "plasma", "energy", "kinetic",
            "potential", "force", "forces", "motion", "speed", "velocity", "acceleration",
            "gravity", "friction", "pressure", "temperature", "heat", "light", "sound",
            "electricity", "magnetism", "wave", "waves", "frequency", "amplitude", "wavelength",
            "radiation", "mechanics", "dynamics", "kinematics", "momentum", "work", "power",
            "machine", "machines", "lever", "pulley", "inclined plane", "simple machine",
            "compound machine", "thermodynamics", "optics", "reflection", "refraction", "lens",
            "mirror", "current", "voltage", "resistance", "circuit", "ohm's law", "electromagnetic",
            "atomic", "nuclear", "radioactivity", "quantum", "relativity", "atom", "atoms",
            "molecule", "molecules", "element", "elements", "compound", "compounds", "mixture",
            "mixtures", "solution", "solutions", "acid", "acids", "base", "bases", "salt", "salts",
            "pH", "indicator", "indicators", "reaction", "reactions", "chemical", "physical",
            "change", "changes", "catalyst", "catalysts", "periodic table", "metals", "non-metals",
            "metalloids", "ion", "ions", "bond", "bonds", "ionic", "covalent", "molecular",
            "crystalline", "oxidation", "reduction", "combustion", "corrosion", "electrolysis",
            "cell", "cells", "tissue", "tissues", "organ", "organs", "system", "systems",
            "organism", "organisms", "life", "living", "non-living", "characteristics", "nutrition",
            "respiration", "excretion", "growth", "reproduction", "movement", "photosynthesis",
            "chlorophyll", "stomata", "transpiration", "digestion", "circulation", "blood", "heart",
            "lungs", "kidney", "brain", "nervous", "skeleton", "muscle", "muscles", "bone", "bones",
            "joint", "joints", "genetics", "heredity", "DNA", "RNA", "chromosome", "gene", "genes",
            "evolution", "adaptation", "natural selection", "species", "classification", "bacteria",
            "virus", "viruses", "fungi", "algae", "protozoa", "ecosystem", "environment",
            "food chain", "food web", "habitat", "biodiversity",
        ],
    ),
    (
        "Physical & Health Education",
        &[
            "fitness", "physical fitness", "exercise", "workout", "training", "conditioning",
            "cardiovascular", "endurance", "strength", "muscular strength", "flexibility",
            "agility", "balance", "coordination", "speed", "power", "body composition", "aerobic",
            "anaerobic", "health", "nutrition", "diet", "balanced diet", "nutrients", "vitamins",
            "minerals", "proteins", "carbohydrates", "fats", "calories", "hydration",
            "water intake", "healthy lifestyle", "wellness", "mental health", "stress management",
            "sports", "games", "team sports", "individual sports", "athletics", "track and field",
            "swimming", "gymnastics", "basketball", "football", "volleyball", "cricket", "tennis",
            "badminton", "table tennis", "hockey", "soccer", "running", "jumping", "throwing",
            "movement", "motor skills", "locomotor", "non-locomotor", "manipulative skills",
            "fundamental movement", "gross motor", "fine motor", "rhythm", "dance", "martial arts",
            "yoga", "stretching", "warm-up", "cool-down", "safety", "first aid",
            "injury prevention", "rules", "regulations", "fair play", "sportsmanship", "teamwork",
            "leadership", "communication", "cooperation",
        ],
    ),
    (
        "Physics",
        &[
            "mechanics", "motion", "kinematics", "dynamics", "force", "forces", "newton's laws",
            "momentum", "energy", "work", "power", "simple harmonic motion", "waves", "sound",
            "light", "optics", "reflection", "refraction", "interference", "diffraction",
            "electricity", "current", "voltage", "resistance", "capacitance", "inductance",
            "magnetism", "electromagnetic", "induction", "transformer", "motor", "generator",
            "thermodynamics", "heat", "temperature", "entropy", "gas laws", "kinetic theory",
            "atomic physics", "nuclear physics", "radioactivity", "quantum", "relativity",
            "semiconductor", "diode", "transistor", "amplifier", "oscillator", "digital",
        ],
    ),
    (
        "Chemistry",
        &[
            "atomic structure", "periodic table", "chemical bonding", "ionic", "covalent",
            "metallic", "molecular", "crystal", "lattice", "solutions", "acids", "bases", "salts",
            "pH", "redox", "oxidation", "reduction", "electrochemistry", "thermochemistry",
            "chemical kinetics", "equilibrium", "organic chemistry", "hydrocarbons", "alcohols",
            "aldehydes", "ketones", "carboxylic acids", "esters", "amines", "polymers",
            "inorganic chemistry", "coordination compounds", "metallurgy", "qualitative analysis",
            "quantitative analysis", "spectroscopy", "chromatography", "environmental chemistry",
        ],
    ),
    (
        "Biology",
        &[
            "cell biology", "cell division", "mitosis", "meiosis", "genetics", "mendel's laws",
            "inheritance", "DNA replication", "transcription", "translation", "mutation",
            "biotechnology", "genetic engineering", "cloning", "plant physiology", "photosynthesis",
            "respiration", "transpiration", "human physiology", "digestive system",
            "respiratory system", "circulatory system", "excretory system", "nervous system",
            "endocrine system", "reproductive system", "ecology", "ecosystem", "food chains",
            "biogeochemical cycles", "evolution", "natural selection", "speciation", "biodiversity",
            "conservation", "microbiology", "bacteria", "viruses", "fungi", "immunity", "diseases",
        ],
    ),
    (
        "English",
        &[
            "grammar", "noun", "pronoun", "verb", "adjective", "adverb", "preposition",
            "conjunction", "article", "tense", "past", "present", "future", "active", "passive",
            "voice", "sentence", "clause", "phrase", "subject", "predicate", "object", "complement",
            "direct", "indirect", "speech", "punctuation", "capitalization", "spelling",
            "literature", "poem", "poetry", "prose", "novel", "story", "short story", "drama",
            "play", "act", "scene", "character", "protagonist", "antagonist", "theme", "plot",
            "setting", "conflict", "climax", "resolution", "metaphor", "simile", "alliteration",
            "personification", "irony", "symbolism", "imagery", "rhyme", "rhythm", "meter", "essay",
            "paragraph", "introduction", "conclusion", "thesis", "argument", "persuasive",
            "narrative", "descriptive", "expository", "creative writing", "composition",
            "comprehension", "reading", "vocabulary", "synonyms", "antonyms", "homonyms", "prefix",
            "suffix", "root word", "context", "inference", "summary", "main idea",
        ],
    ),
    (
        "Hindi",
        &[
            "व्याकरण", "संज्ञा", "सर्वनाम", "विशेषण", "क्रिया", "क्रिया विशेषण", "संबंधबोधक",
            "समुच्चयबोधक", "विस्मयादिबोधक", "वाक्य", "उद्देश्य", "विधेय", "कर्ता", "कर्म", "करण",
            "काल", "वर्तमान", "भूत", "भविष्य", "वचन", "एकवचन", "बहुवचन", "लिंग", "पुल्लिंग",
            "स्त्रीलिंग", "कारक", "संधि", "उपसर्ग", "प्रत्यय", "समास", "तत्पुरुष", "द्वंद",
            "बहुव्रीहि", "साहित्य", "कविता", "कहानी", "उपन्यास", "नाटक", "निबंध", "गद्य", "पद्य",
            "छंद", "अलंकार", "रस", "शृंगार", "वीर", "करुण", "हास्य", "रौद्र", "भयानक", "वीभत्स",
            "अद्भुत", "शांत", "वात्सल्य", "भक्ति", "यमक", "अनुप्रास", "उपमा", "रूपक", "लेखन",
            "अनुच्छेद", "पत्र", "औपचारिक", "अनौपचारिक", "आवेदन", "शिकायत", "सूचना", "विज्ञापन",
            "संवाद", "एकालाप", "वर्णन", "चित्र", "घटना", "यात्रा",
        ],
    ),
    (
        "Social Science",
        &[
            "history", "ancient", "medieval", "modern", "contemporary", "civilization",
            "indus valley", "harappan", "vedic", "mauryan", "gupta", "delhi sultanate", "mughal",
            "british", "independence", "freedom struggle", "mahatma gandhi", "nehru", "nationalism",
            "world war", "cold war", "renaissance", "industrial revolution", "french revolution",
            "geography", "physical", "human", "economic", "political", "map", "globe", "latitude",
            "longitude", "equator", "prime meridian", "climate", "weather", "monsoon", "seasons",
            "continents", "oceans", "mountains", "rivers", "plateaus", "plains", "deserts",
            "forests", "agriculture", "irrigation", "crops", "industries", "transportation",
            "population", "migration", "urbanization", "resources", "mineral", "energy", "civics",
            "government", "democracy", "constitution", "fundamental rights", "duties", "parliament",
            "lok sabha", "rajya sabha", "prime minister", "president", "judiciary", "supreme court",
            "high court", "federalism", "state", "union", "panchayati raj", "elections", "voting",
            "political parties", "local government", "administration", "economics", "demand",
            "supply", "market", "price", "money", "banking", "credit", "industry", "service sector",
            "employment", "unemployment", "poverty", "development", "human development",
            "globalization", "liberalization", "privatization",
        ],
    ),
    (
        "Computer Science",
        &[
            "computer", "hardware", "software", "input", "output", "processing", "storage",
            "memory", "RAM", "ROM", "CPU", "ALU", "control unit", "motherboard", "keyboard",
            "mouse", "monitor", "printer", "scanner", "operating system", "windows", "linux",
            "programming", "algorithm", "flowchart", "pseudocode", "variable", "constant",
            "data type", "integer", "float", "string", "boolean", "array", "loop", "condition",
            "if", "else", "while", "for", "function", "procedure", "parameter", "return", "python",
            "java", "c++", "javascript", "html", "css", "sql", "database", "data structure",
            "stack", "queue", "linked list", "tree", "graph", "sorting", "searching",
            "object oriented", "class", "object", "inheritance", "polymorphism", "encapsulation",
            "network", "internet", "protocol", "tcp", "ip", "http", "ftp", "cybersecurity",
            "encryption", "firewall", "virus", "malware", "artificial intelligence",
            "machine learning", "cloud computing", "big data", "blockchain",
        ],
    ),
    (
        "Economics",
        &[
            "microeconomics", "macroeconomics", "demand", "supply", "elasticity", "utility",
            "production", "cost", "revenue", "profit", "market", "competition", "monopoly",
            "oligopoly", "consumer", "producer", "equilibrium", "price", "inflation", "deflation",
            "GDP", "GNP", "national income", "fiscal policy", "monetary policy", "taxation",
            "budget", "trade", "export", "import", "balance of payments", "exchange rate",
            "development", "growth", "poverty", "inequality", "unemployment", "employment",
        ],
    ),
    (
        "EVS (Environmental Studies)",
        &[
            "environment", "pollution", "air pollution", "water pollution", "noise pollution",
            "soil pollution", "conservation", "natural resources", "renewable", "non-renewable",
            "forest", "deforestation", "afforestation", "wildlife", "biodiversity", "extinction",
            "ecosystem", "food chain", "food web", "habitat", "adaptation", "climate change",
            "global warming", "greenhouse effect", "ozone layer", "acid rain", "waste management",
            "recycling", "reduce", "reuse", "sustainable development", "energy conservation",
        ],
    ),
    (
        "Art & Craft",
        &[
            "drawing", "painting", "sketching", "coloring", "craft", "handicraft", "sculpture",
            "pottery", "paper craft", "origami", "collage", "creative", "artistic", "design",
            "pattern", "texture", "color", "shape", "form", "composition", "perspective",
        ],
    ),
    (
        "Business Studies",
        &[
            "business", "enterprise", "entrepreneur", "management", "planning", "organizing",
            "directing", "controlling", "marketing", "production", "finance", "human resources",
            "accounting", "profit", "loss", "revenue", "capital", "partnership", "company",
            "cooperative", "sole proprietorship", "stock exchange", "shares", "debentures",
        ],
    ),
    (
        "Accountancy",
        &[
            "accounting", "bookkeeping", "journal", "ledger", "trial balance", "balance sheet",
            "profit and loss", "cash book", "bank reconciliation", "depreciation", "bad debts",
            "provisions", "reserves", "capital", "revenue", "assets", "liabilities", "equity",
            "partnership", "admission", "retirement", "dissolution", "company accounts",
        ],
    ),
];
