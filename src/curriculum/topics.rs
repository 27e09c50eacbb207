// 教育委員会・科目・学年ごとのカリキュラム単元

use super::Board;

pub(super) struct TopicEntry {
    pub board: Board,
    pub subject: &'static str,
    pub grade: u8,
    pub topics: &'static [&'static str],
}

pub(super) static TOPICS: &[TopicEntry] = &[
    TopicEntry {
        board: Board::Cbse,
        subject: "Mathematics",
        grade: 1,
        topics: &[
            "Numbers 1-99", "Counting", "Before and After", "Shapes", "Patterns", "Addition",
            "Subtraction", "Money", "Time", "Measurement",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Mathematics",
        grade: 2,
        topics: &[
            "Numbers 1-100", "Place Value", "Addition", "Subtraction", "Multiplication Tables",
            "Shapes", "Patterns", "Money", "Time", "Data Handling",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Mathematics",
        grade: 3,
        topics: &[
            "Numbers 1-1000", "Place Value", "Addition", "Subtraction", "Multiplication",
            "Division", "Fractions", "Shapes", "Measurement", "Data Handling",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Mathematics",
        grade: 4,
        topics: &[
            "Numbers", "Place Value", "Four Operations", "Factors and Multiples", "Fractions",
            "Decimals", "Measurement", "Geometry", "Data Handling",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Mathematics",
        grade: 5,
        topics: &[
            "Large Numbers", "Four Operations", "Factors and Multiples", "Fractions", "Decimals",
            "Area and Perimeter", "Data Handling",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Mathematics",
        grade: 6,
        topics: &[
            "Knowing Our Numbers", "Whole Numbers", "Playing with Numbers",
            "Basic Geometrical Ideas", "Integers", "Fractions", "Decimals", "Data Handling",
            "Mensuration", "Algebra", "Ratio and Proportion", "Practical Geometry",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Mathematics",
        grade: 7,
        topics: &[
            "Integers", "Fractions and Decimals", "Data Handling", "Simple Equations",
            "Lines and Angles", "Triangles", "Congruence", "Comparing Quantities",
            "Rational Numbers", "Practical Geometry", "Perimeter and Area", "Algebraic Expressions",
            "Exponents and Powers", "Symmetry", "Visualising Solid Shapes",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Mathematics",
        grade: 8,
        topics: &[
            "Rational Numbers", "Linear Equations in One Variable", "Quadrilaterals",
            "Practical Geometry", "Data Handling", "Squares and Square Roots",
            "Cubes and Cube Roots", "Comparing Quantities", "Algebraic Expressions", "Mensuration",
            "Exponents and Powers", "Direct and Inverse Proportions", "Factorisation",
            "Introduction to Graphs", "Playing with Numbers",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Mathematics",
        grade: 9,
        topics: &[
            "Number Systems", "Polynomials", "Coordinate Geometry",
            "Linear Equations in Two Variables", "Introduction to Euclid's Geometry",
            "Lines and Angles", "Triangles", "Quadrilaterals",
            "Areas of Parallelograms and Triangles", "Circles", "Constructions", "Heron's Formula",
            "Surface Areas and Volumes", "Statistics", "Probability",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Mathematics",
        grade: 10,
        topics: &[
            "Real Numbers", "Polynomials", "Pair of Linear Equations in Two Variables",
            "Quadratic Equations", "Arithmetic Progressions", "Triangles", "Coordinate Geometry",
            "Introduction to Trigonometry", "Some Applications of Trigonometry", "Circles",
            "Constructions", "Areas Related to Circles", "Surface Areas and Volumes", "Statistics",
            "Probability",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Mathematics",
        grade: 11,
        topics: &[
            "Sets", "Relations and Functions", "Trigonometric Functions",
            "Principle of Mathematical Induction", "Complex Numbers and Quadratic Equations",
            "Linear Inequalities", "Permutations and Combinations", "Binomial Theorem",
            "Sequences and Series", "Straight Lines", "Conic Sections",
            "Introduction to Three Dimensional Geometry", "Limits and Derivatives",
            "Mathematical Reasoning", "Statistics", "Probability",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Mathematics",
        grade: 12,
        topics: &[
            "Relations and Functions", "Inverse Trigonometric Functions", "Matrices",
            "Determinants", "Continuity and Differentiability", "Applications of Derivatives",
            "Integrals", "Applications of Integrals", "Differential Equations", "Vector Algebra",
            "Three Dimensional Geometry", "Linear Programming", "Probability",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Science",
        grade: 1,
        topics: &[
            "My Body", "Living and Non-Living", "Plants Around Us", "Animals Around Us", "Food",
            "Water", "My Family",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Science",
        grade: 2,
        topics: &[
            "Living and Non-Living", "Plants", "Animals", "Food", "Water", "Air", "Weather",
            "My Body", "Safety and First Aid",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Science",
        grade: 3,
        topics: &[
            "Living and Non-Living", "Plants", "Animals", "My Body", "Food", "Housing and Clothing",
            "Transport and Communication",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Science",
        grade: 4,
        topics: &[
            "Food", "Clothing", "Housing", "Water", "Travel and Transport", "The World of Plants",
            "The World of Animals", "Birds",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Science",
        grade: 5,
        topics: &[
            "Food and Health", "Clothing", "Housing", "Water", "Travel and Transport", "Plants",
            "Animals", "Birds", "Our Environment",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Science",
        grade: 6,
        topics: &[
            "Food", "Components of Food", "Fibre to Fabric", "Sorting Materials into Groups",
            "Separation of Substances", "Changes Around Us", "Getting to Know Plants",
            "Body Movements", "The Living Organisms", "Motion and Measurement of Distances",
            "Light, Shadows and Reflections", "Electricity and Circuits", "Fun with Magnets",
            "Water", "Air Around Us", "Garbage In, Garbage Out",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Science",
        grade: 7,
        topics: &[
            "Nutrition in Plants", "Nutrition in Animals", "Fibre to Fabric", "Heat",
            "Acids, Bases and Salts", "Physical and Chemical Changes",
            "Weather, Climate and Adaptations", "Winds, Storms and Cyclones", "Soil",
            "Respiration in Organisms", "Transportation in Animals and Plants",
            "Reproduction in Plants", "Motion and Time", "Electric Current and its Effects",
            "Light", "Water", "Forests", "Wastewater Story",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Science",
        grade: 8,
        topics: &[
            "Crop Production and Management", "Microorganisms", "Synthetic Fibres and Plastics",
            "Materials", "Coal and Petroleum", "Combustion and Flame",
            "Conservation of Plants and Animals", "Cell", "Reproduction in Animals",
            "Reaching the Age of Adolescence", "Force and Pressure", "Friction", "Sound",
            "Chemical Effects of Electric Current", "Some Natural Phenomena", "Light",
            "Stars and the Solar System", "Pollution of Air and Water",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Science",
        grade: 9,
        topics: &[
            "Matter in Our Surroundings", "Is Matter Around Us Pure", "Atoms and Molecules",
            "Structure of the Atom", "The Fundamental Unit of Life", "Tissues",
            "Diversity in Living Organisms", "Motion", "Force and Laws of Motion", "Gravitation",
            "Work and Energy", "Sound", "Why Do We Fall Ill", "Natural Resources",
            "Improvement in Food Resources",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Science",
        grade: 10,
        topics: &[
            "Chemical Reactions and Equations", "Acids, Bases and Salts", "Metals and Non-metals",
            "Carbon and its Compounds", "Periodic Classification of Elements", "Life Processes",
            "Control and Coordination", "How do Organisms Reproduce", "Heredity and Evolution",
            "Light", "Electricity", "Magnetic Effects of Electric Current", "Our Environment",
            "Management of Natural Resources",
        ],
    },
    TopicEntry {
        board: Board::Cbse,
        subject: "Physical & Health Education",
        grade: 8,
        topics: &[
            "Change", "Communication", "Relationships", "Components of Fitness",
            "Cardiovascular Endurance", "Muscular Strength", "Muscular Endurance", "Flexibility",
            "Body Composition", "Training Principles", "Specificity Principle",
            "Progressive Overload", "Reversibility Principle", "Training Methods", "Periodization",
            "Exercise Physiology", "Heart Rate Zones", "Fitness Testing", "VO2 Max",
            "Balanced Nutrition", "Macronutrients", "Micronutrients", "Hydration Strategies",
            "Pre-exercise Nutrition", "Post-exercise Recovery", "Sports Nutrition",
            "Healthy Lifestyle Choices", "Sleep and Recovery", "Stress Management",
            "Mental Health and Physical Activity", "Body Image", "Adolescent Health",
            "Fundamental Movement Skills", "Locomotor Skills", "Non-locomotor Skills",
            "Manipulative Skills", "Aesthetic Movement", "Gymnastics", "Dance", "Martial Arts",
            "Yoga", "Rhythmic Activities", "Team Sports", "Football", "Basketball", "Volleyball",
            "Hockey", "Cricket", "Individual Sports", "Athletics", "Swimming", "Track and Field",
            "Tennis", "Badminton", "Biomechanics", "Movement Analysis", "Technique Development",
            "Motor Learning", "Safety in Physical Activity", "Risk Assessment", "Injury Prevention",
            "Warm-up", "Cool-down", "Basic First Aid", "RICE Protocol", "Emergency Procedures",
            "Sports Injuries", "Equipment Safety", "Environmental Safety", "Heat-related Illness",
            "Concussion Awareness", "Team Communication", "Verbal Communication",
            "Non-verbal Communication", "Coach-Athlete Communication", "Referee Communication",
            "Leadership in Sports", "Conflict Resolution", "Sportsmanship", "Fair Play",
            "Respect in Sports", "Adaptation", "Balance", "Energy", "Function", "Interaction",
            "Perspective", "Space", "Systems", "Performance", "Environment", "Culture", "Identity",
        ],
    },
    TopicEntry {
        board: Board::Ib,
        subject: "Mathematics",
        grade: 1,
        topics: &[
            "Number Recognition", "Counting", "Shapes", "Patterns", "Sorting", "Size Comparison",
        ],
    },
    TopicEntry {
        board: Board::Ib,
        subject: "Mathematics",
        grade: 2,
        topics: &[
            "Numbers to 100", "Addition", "Subtraction", "Shapes", "Measurement", "Data Collection",
        ],
    },
    TopicEntry {
        board: Board::Ib,
        subject: "Mathematics",
        grade: 3,
        topics: &[
            "Numbers to 1000", "Operations", "Fractions", "Geometry", "Measurement", "Graphs",
        ],
    },
    TopicEntry {
        board: Board::Ib,
        subject: "Mathematics",
        grade: 4,
        topics: &[
            "Large Numbers", "Decimals", "Fractions", "Geometry", "Data Analysis", "Probability",
        ],
    },
    TopicEntry {
        board: Board::Ib,
        subject: "Mathematics",
        grade: 5,
        topics: &[
            "Number Theory", "Operations", "Geometry", "Statistics", "Algebra Basics",
            "Problem Solving",
        ],
    },
    TopicEntry {
        board: Board::Ib,
        subject: "Mathematics",
        grade: 6,
        topics: &[
            "Number", "Algebra", "Geometry", "Statistics", "Probability",
            "Mathematical Investigations",
        ],
    },
    TopicEntry {
        board: Board::Ib,
        subject: "Mathematics",
        grade: 7,
        topics: &[
            "Number", "Algebra", "Geometry", "Statistics", "Probability",
            "Mathematical Investigations",
        ],
    },
    TopicEntry {
        board: Board::Ib,
        subject: "Mathematics",
        grade: 8,
        topics: &[
            "Number", "Algebra", "Geometry", "Statistics", "Probability",
            "Mathematical Investigations",
        ],
    },
    TopicEntry {
        board: Board::Ib,
        subject: "Mathematics",
        grade: 9,
        topics: &[
            "Number", "Algebra", "Geometry and Trigonometry", "Statistics and Probability",
            "Mathematical Investigations",
        ],
    },
    TopicEntry {
        board: Board::Ib,
        subject: "Mathematics",
        grade: 10,
        topics: &[
            "Number", "Algebra", "Geometry and Trigonometry", "Statistics and Probability",
            "Mathematical Investigations",
        ],
    },
    TopicEntry {
        board: Board::Ib,
        subject: "Mathematics",
        grade: 11,
        topics: &[
            "Number and Algebra", "Functions", "Geometry and Trigonometry",
            "Statistics and Probability", "Calculus",
        ],
    },
    TopicEntry {
        board: Board::Ib,
        subject: "Mathematics",
        grade: 12,
        topics: &[
            "Number and Algebra", "Functions", "Geometry and Trigonometry",
            "Statistics and Probability", "Calculus",
        ],
    },
    TopicEntry {
        board: Board::Ib,
        subject: "Physical & Health Education",
        grade: 8,
        topics: &[
            "Change", "Communication", "Relationships", "Personal and Cultural Expression",
            "Identities and Relationships", "Scientific and Technical Innovation",
            "Globalization and Sustainability", "Adaptation", "Balance", "Energy", "Function",
            "Interaction", "Perspective", "Space", "Systems", "Performance", "Environment",
            "Culture", "Identity", "Components of Fitness", "Health-related Fitness",
            "Skill-related Fitness", "Cardiovascular Endurance", "Muscular Strength",
            "Muscular Endurance", "Flexibility", "Body Composition", "Power", "Speed", "Agility",
            "Coordination", "Training Principles", "FITT Principle", "Progressive Overload",
            "Specificity", "Reversibility", "Individual Differences", "Training Methods",
            "Interval Training", "Circuit Training", "Continuous Training", "Plyometric Training",
            "Strength Training", "Exercise Physiology", "Energy Systems", "Aerobic System",
            "Anaerobic Systems", "Heart Rate", "VO2 Max", "Lactate Threshold", "Recovery",
            "Sports Nutrition", "Macronutrients", "Carbohydrates", "Proteins", "Fats",
            "Micronutrients", "Vitamins", "Minerals", "Hydration", "Pre-exercise Nutrition",
            "During-exercise Nutrition", "Post-exercise Nutrition", "Supplements", "Healthy Eating",
            "Balanced Diet", "Weight Management", "Body Image", "Fundamental Movement Skills",
            "Locomotor Skills", "Stability Skills", "Manipulative Skills", "Motor Learning",
            "Skill Acquisition", "Practice Methods", "Feedback", "Movement Patterns",
            "Technique Development", "Performance Analysis", "Dance", "Gymnastics", "Martial Arts",
            "Yoga", "Pilates", "Aerobics", "Creative Movement", "Cultural Dance", "Modern Dance",
            "Traditional Games", "Football", "Basketball", "Volleyball", "Hockey", "Rugby",
            "Cricket", "Team Tactics", "Team Strategies", "Roles and Responsibilities",
            "Team Dynamics", "Leadership", "Cooperation", "Communication in Team Sports",
            "Athletics", "Swimming", "Tennis", "Badminton", "Golf", "Track and Field",
            "Individual Performance", "Goal Setting", "Self-motivation", "Mental Preparation",
            "Movement Analysis", "Force", "Motion", "Levers", "Projectile Motion",
            "Center of Gravity", "Stability", "Efficiency of Movement", "Motivation", "Confidence",
            "Anxiety Management", "Concentration", "Mental Training", "Visualization",
            "Relaxation Techniques", "Self-talk", "Flow State", "Stress and Performance",
            "Team Cohesion", "Leadership Styles", "Risk Management", "Injury Prevention",
            "First Aid", "RICE Protocol", "Safety Guidelines", "Equipment Safety",
            "Environmental Considerations", "Heat Illness", "Concussion", "Overuse Injuries",
            "Acute Injuries", "Physical Inactivity", "Obesity", "Non-communicable Diseases",
            "Mental Health", "Health Promotion", "Public Health", "Health Education",
            "Lifestyle Diseases", "Sport and Culture", "Gender in Sport", "Inclusion and Diversity",
            "Disability Sport", "Fair Play", "Ethics in Sport", "Sportsmanship", "Respect",
            "Responsibility", "International Sport", "Olympic Movement", "Paralympic Movement",
            "Verbal Communication", "Non-verbal Communication", "Body Language",
            "Coaching Communication", "Referee Signals", "Team Communication", "Instructions",
            "Encouragement", "Conflict Resolution", "Video Analysis", "Heart Rate Monitors",
            "GPS Tracking", "Biomechanical Analysis", "Sports Apps", "Wearable Technology",
            "Data Collection", "Thinking Skills", "Research Skills", "Communication Skills",
            "Social Skills", "Self-management Skills", "Critical Thinking", "Creative Thinking",
            "Collaboration", "Organization", "Time Management",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Mathematics",
        grade: 1,
        topics: &[
            "Numbers 1-100", "Addition", "Subtraction", "Shapes", "Patterns", "Money", "Time",
            "Measurement",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Mathematics",
        grade: 2,
        topics: &[
            "Numbers 1-100", "Place Value", "Addition", "Subtraction", "Multiplication", "Shapes",
            "Patterns", "Money", "Time", "Measurement",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Mathematics",
        grade: 3,
        topics: &[
            "Numbers 1-1000", "Four Operations", "Fractions", "Shapes", "Measurement", "Money",
            "Time", "Data",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Mathematics",
        grade: 4,
        topics: &[
            "Numbers", "Four Operations", "Factors and Multiples", "Fractions", "Decimals",
            "Geometry", "Measurement", "Data",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Mathematics",
        grade: 5,
        topics: &[
            "Large Numbers", "Four Operations", "Fractions", "Decimals", "Percentage", "Geometry",
            "Measurement", "Data",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Mathematics",
        grade: 6,
        topics: &[
            "Number System", "Integers", "Fractions", "Decimals", "Percentage",
            "Ratio and Proportion", "Unitary Method", "Simple Interest", "Basic Algebra",
            "Geometry", "Mensuration", "Data Handling",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Mathematics",
        grade: 7,
        topics: &[
            "Integers", "Rational Numbers", "Exponents", "Algebraic Expressions",
            "Simple Linear Equations", "Ratio and Proportion", "Unitary Method", "Percentage",
            "Profit and Loss", "Simple Interest", "Compound Interest", "Lines and Angles",
            "Triangles", "Symmetry", "Mensuration", "Data Handling",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Mathematics",
        grade: 8,
        topics: &[
            "Rational Numbers", "Exponents", "Squares and Square Roots", "Cubes and Cube Roots",
            "Playing with Numbers", "Algebraic Expressions and Identities", "Factorisation",
            "Linear Equations", "Understanding Quadrilaterals", "Practical Geometry", "Mensuration",
            "Data Handling", "Probability",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Mathematics",
        grade: 9,
        topics: &[
            "Rational and Irrational Numbers", "Compound Interest", "Expansions", "Factorisation",
            "Simultaneous Linear Equations", "Indices", "Logarithms", "Triangles",
            "Mean and Median", "Rectilinear Figures", "Theorem on Area", "Coordinate Geometry",
            "Trigonometry", "Statistics", "Probability",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Mathematics",
        grade: 10,
        topics: &[
            "Commercial Mathematics", "Sales Tax and Value Added Tax", "Banking",
            "Linear Inequations", "Quadratic Equations", "Ratio and Proportion", "Similarity",
            "Loci", "Circles", "Constructions", "Mensuration", "Trigonometry",
            "Coordinate Geometry", "Statistics", "Probability",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Physics",
        grade: 6,
        topics: &[
            "Matter", "Physical Quantities and Measurement", "Force and Pressure", "Energy",
            "Light", "Sound", "Heat", "Magnetism",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Physics",
        grade: 7,
        topics: &[
            "Matter", "Physical Quantities and Measurement", "Motion", "Energy", "Light", "Sound",
            "Heat", "Electricity", "Magnetism",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Physics",
        grade: 8,
        topics: &[
            "Matter", "Force and Pressure", "Energy", "Light", "Sound", "Heat", "Electricity",
            "Magnetism",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Physics",
        grade: 9,
        topics: &[
            "Measurements and Experimentation", "Motion in One Dimension",
            "Force and Laws of Motion", "Turning Effect of Forces",
            "Pressure in Fluids and Atmospheric Pressure",
            "Upthrust in Fluids, Archimedes' Principle and Floatation", "Heat and Energy",
            "Reflection of Light", "Propagation of Sound Waves", "Current Electricity", "Magnetism",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Physics",
        grade: 10,
        topics: &[
            "Force", "Work, Energy and Power", "Machines", "Sound", "Light", "Spectrum",
            "Electromagnetic Induction", "Electromagnetic Radiation", "The Electron",
            "Atomic Structure", "Radioactivity",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Chemistry",
        grade: 6,
        topics: &[
            "Matter", "Elements, Compounds and Mixtures", "Separation of Mixtures",
            "Atomic Structure", "Language of Chemistry", "Metals and Non-metals",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Chemistry",
        grade: 7,
        topics: &[
            "Matter", "Elements, Compounds and Mixtures", "Atomic Structure",
            "Language of Chemistry", "Chemical Reactions", "Acids, Bases and Salts",
            "Air and Atmosphere",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Chemistry",
        grade: 8,
        topics: &[
            "Matter", "Atomic Structure", "Language of Chemistry", "Chemical Reactions",
            "Acids, Bases and Salts", "Hydrogen", "Water", "Carbon and its Compounds",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Chemistry",
        grade: 9,
        topics: &[
            "The Language of Chemistry", "Chemical Changes and Reactions", "Water",
            "Atomic Structure and Chemical Bonding", "The Periodic Table", "Study of Gas Laws",
            "Atmospheric Pollution", "Sulphur", "Sound",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Chemistry",
        grade: 10,
        topics: &[
            "Periodic Properties and Variations", "Chemical Bonding",
            "Study of Acids, Bases and Salts", "Analytical Chemistry",
            "Mole Concept and Stoichiometry", "Electrolysis", "Metallurgy", "Study of Compounds",
            "Organic Chemistry", "Practical Chemistry",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Biology",
        grade: 6,
        topics: &[
            "The Leaf", "Photosynthesis", "The Root", "The Stem", "The Flower",
            "Pollination and Fertilisation", "Seeds and their Germination", "Respiration in Plants",
            "Excretion in Plants", "The Cell", "Simple Tissues in Plants",
            "Absorption and Conduction in Plants",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Biology",
        grade: 7,
        topics: &[
            "Nutrition in Plants", "Nutrition in Animals", "Transportation in Living Organisms",
            "Respiration", "Excretion", "Nervous System", "Reproductive System",
            "Health and Hygiene", "Classification",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Biology",
        grade: 8,
        topics: &[
            "Transportation in Plants", "Transportation in Animals", "Excretion", "Reproduction",
            "Ecosystem", "Pollution",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Biology",
        grade: 9,
        topics: &[
            "Plant and Animal Tissues", "The Flower", "Pollination and Fertilisation", "Seeds",
            "Respiration in Plants", "Transpiration", "Excretion in Plants and Animals",
            "Circulation", "The Nervous System and Sense Organs", "The Respiratory System",
            "The Excretory System", "Reproduction in Plants", "Reproduction in Animals",
        ],
    },
    TopicEntry {
        board: Board::Icse,
        subject: "Biology",
        grade: 10,
        topics: &[
            "Photosynthesis", "Respiration", "Circulatory System", "Excretory System",
            "Nervous System", "Sense Organs", "Reproductive System", "Genetics", "Pollution",
            "Population",
        ],
    },
    TopicEntry {
        board: Board::CambridgeIgcse,
        subject: "Mathematics",
        grade: 9,
        topics: &[
            "Number", "Algebra", "Geometry", "Mensuration", "Coordinate Geometry", "Trigonometry",
            "Matrices and Transformations", "Probability", "Statistics",
        ],
    },
    TopicEntry {
        board: Board::CambridgeIgcse,
        subject: "Mathematics",
        grade: 10,
        topics: &[
            "Number", "Algebra", "Geometry", "Mensuration", "Coordinate Geometry", "Trigonometry",
            "Matrices and Transformations", "Probability", "Statistics",
        ],
    },
    TopicEntry {
        board: Board::CambridgeIgcse,
        subject: "Mathematics",
        grade: 11,
        topics: &[
            "Pure Mathematics", "Mechanics", "Probability and Statistics",
        ],
    },
    TopicEntry {
        board: Board::CambridgeIgcse,
        subject: "Mathematics",
        grade: 12,
        topics: &[
            "Pure Mathematics", "Mechanics", "Probability and Statistics",
        ],
    },
    TopicEntry {
        board: Board::CambridgeIgcse,
        subject: "Physics",
        grade: 9,
        topics: &[
            "General Physics", "Thermal Physics", "Properties of Waves",
            "Electricity and Magnetism", "Atomic Physics",
        ],
    },
    TopicEntry {
        board: Board::CambridgeIgcse,
        subject: "Physics",
        grade: 10,
        topics: &[
            "General Physics", "Thermal Physics", "Properties of Waves",
            "Electricity and Magnetism", "Atomic Physics",
        ],
    },
    TopicEntry {
        board: Board::CambridgeIgcse,
        subject: "Physics",
        grade: 11,
        topics: &[
            "Mechanics", "Gravitational Fields", "Deformation of Solids", "Waves", "Electricity",
            "Electromagnetic Fields", "Atomic and Nuclear Physics",
        ],
    },
    TopicEntry {
        board: Board::CambridgeIgcse,
        subject: "Physics",
        grade: 12,
        topics: &[
            "Mechanics", "Gravitational Fields", "Deformation of Solids", "Waves", "Electricity",
            "Electromagnetic Fields", "Atomic and Nuclear Physics",
        ],
    },
    TopicEntry {
        board: Board::CambridgeIgcse,
        subject: "Chemistry",
        grade: 9,
        topics: &[
            "The Particulate Nature of Matter", "Experimental Techniques",
            "Atoms, Elements and Compounds", "Stoichiometry", "Electricity and Chemistry",
            "Chemical Energetics", "Chemical Reactions", "Acids, Bases and Salts",
            "The Periodic Table", "Metals", "Air and Water", "Sulfur", "Carbonates",
        ],
    },
    TopicEntry {
        board: Board::CambridgeIgcse,
        subject: "Chemistry",
        grade: 10,
        topics: &[
            "The Particulate Nature of Matter", "Experimental Techniques",
            "Atoms, Elements and Compounds", "Stoichiometry", "Electricity and Chemistry",
            "Chemical Energetics", "Chemical Reactions", "Acids, Bases and Salts",
            "The Periodic Table", "Metals", "Air and Water", "Sulfur", "Carbonates",
        ],
    },
    TopicEntry {
        board: Board::CambridgeIgcse,
        subject: "Chemistry",
        grade: 11,
        topics: &[
            "Atomic Structure", "Atoms, Molecules and Stoichiometry", "Chemical Bonding",
            "States of Matter", "Chemical Energetics", "Electrochemistry", "Equilibria",
            "Reaction Kinetics", "The Periodic Table", "Group Chemistry",
            "Introduction to Organic Chemistry", "Polymerisation",
        ],
    },
    TopicEntry {
        board: Board::CambridgeIgcse,
        subject: "Chemistry",
        grade: 12,
        topics: &[
            "Atomic Structure", "Atoms, Molecules and Stoichiometry", "Chemical Bonding",
            "States of Matter", "Chemical Energetics", "Electrochemistry", "Equilibria",
            "Reaction Kinetics", "The Periodic Table", "Group Chemistry",
            "Introduction to Organic Chemistry", "Polymerisation",
        ],
    },
    TopicEntry {
        board: Board::CambridgeIgcse,
        subject: "Biology",
        grade: 9,
        topics: &[
            "Characteristics and Classification of Living Organisms",
            "Organisation and Maintenance of the Organism", "Movement into and out of Cells",
            "Biological Molecules", "Enzymes", "Plant Nutrition", "Human Nutrition",
            "Transport in Plants", "Transport in Animals", "Diseases and Immunity", "Gas Exchange",
            "Respiration", "Excretion", "Coordination and Response", "Drugs", "Reproduction",
            "Inheritance", "Variation and Selection", "Organisms and their Environment",
            "Biotechnology and Genetic Engineering", "Human Influences on Ecosystems",
        ],
    },
    TopicEntry {
        board: Board::CambridgeIgcse,
        subject: "Biology",
        grade: 10,
        topics: &[
            "Characteristics and Classification of Living Organisms",
            "Organisation and Maintenance of the Organism", "Movement into and out of Cells",
            "Biological Molecules", "Enzymes", "Plant Nutrition", "Human Nutrition",
            "Transport in Plants", "Transport in Animals", "Diseases and Immunity", "Gas Exchange",
            "Respiration", "Excretion", "Coordination and Response", "Drugs", "Reproduction",
            "Inheritance", "Variation and Selection", "Organisms and their Environment",
            "Biotechnology and Genetic Engineering", "Human Influences on Ecosystems",
        ],
    },
    TopicEntry {
        board: Board::CambridgeIgcse,
        subject: "Biology",
        grade: 11,
        topics: &[
            "Cell Structure", "Biological Molecules", "Enzymes", "Cell Membranes and Transport",
            "The Mitotic Cell Cycle", "Nucleic Acids and Protein Synthesis", "Transport in Plants",
            "Transport in Mammals", "Gas Exchange", "Infectious Diseases", "Immunity",
        ],
    },
    TopicEntry {
        board: Board::CambridgeIgcse,
        subject: "Biology",
        grade: 12,
        topics: &[
            "Cell Structure", "Biological Molecules", "Enzymes", "Cell Membranes and Transport",
            "The Mitotic Cell Cycle", "Nucleic Acids and Protein Synthesis", "Transport in Plants",
            "Transport in Mammals", "Gas Exchange", "Infectious Diseases", "Immunity",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Mathematics",
        grade: 1,
        topics: &[
            "Numbers 1-99", "Counting", "Shapes", "Patterns", "Addition", "Subtraction",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Mathematics",
        grade: 2,
        topics: &[
            "Numbers 1-100", "Addition", "Subtraction", "Multiplication", "Shapes", "Measurement",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Mathematics",
        grade: 3,
        topics: &[
            "Numbers 1-1000", "Four Operations", "Fractions", "Shapes", "Money", "Time",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Mathematics",
        grade: 4,
        topics: &[
            "Large Numbers", "Operations", "Fractions", "Decimals", "Geometry", "Measurement",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Mathematics",
        grade: 5,
        topics: &[
            "Numbers", "Operations", "Fractions", "Decimals", "Geometry", "Data",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Mathematics",
        grade: 6,
        topics: &[
            "Integers", "Fractions", "Decimals", "Basic Algebra", "Geometry", "Mensuration",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Mathematics",
        grade: 7,
        topics: &[
            "Integers", "Rational Numbers", "Algebra", "Geometry", "Mensuration", "Data",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Mathematics",
        grade: 8,
        topics: &[
            "Numbers", "Algebra", "Geometry", "Mensuration", "Statistics", "Graphs",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Mathematics",
        grade: 9,
        topics: &[
            "Real Numbers", "Polynomials", "Linear Equations", "Geometry", "Trigonometry",
            "Statistics",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Mathematics",
        grade: 10,
        topics: &[
            "Real Numbers", "Polynomials", "Quadratic Equations", "Geometry", "Trigonometry",
            "Statistics",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Mathematics",
        grade: 11,
        topics: &[
            "Sets and Functions", "Trigonometry", "Algebra", "Coordinate Geometry", "Calculus",
            "Statistics",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Mathematics",
        grade: 12,
        topics: &[
            "Relations and Functions", "Algebra", "Calculus", "Vectors", "Probability",
            "Linear Programming",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Science",
        grade: 6,
        topics: &[
            "Food and its Components", "Separation of Substances", "Plants", "Animals", "Light",
            "Electricity", "Magnetism",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Science",
        grade: 7,
        topics: &[
            "Nutrition", "Respiration", "Transportation", "Reproduction", "Motion", "Heat", "Sound",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Science",
        grade: 8,
        topics: &[
            "Crop Production", "Microorganisms", "Force and Pressure", "Friction", "Sound",
            "Chemical Effects",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Science",
        grade: 9,
        topics: &[
            "Matter", "Atoms and Molecules", "Tissues", "Motion", "Force", "Gravitation",
            "Work and Energy",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Science",
        grade: 10,
        topics: &[
            "Chemical Reactions", "Acids and Bases", "Metals", "Life Processes", "Reproduction",
            "Heredity", "Light", "Electricity",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Social Science",
        grade: 6,
        topics: &[
            "History of India", "Geography of India", "Civics", "Economics",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Social Science",
        grade: 7,
        topics: &[
            "Medieval History", "Geography", "Civics", "Economics",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Social Science",
        grade: 8,
        topics: &[
            "Modern History", "Geography", "Civics", "Economics",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Social Science",
        grade: 9,
        topics: &[
            "World History", "Contemporary India", "Democratic Politics", "Economics",
        ],
    },
    TopicEntry {
        board: Board::StateBoard,
        subject: "Social Science",
        grade: 10,
        topics: &[
            "History", "Geography", "Political Science", "Economics",
        ],
    },
];
