//! Table definitions. Every statement is idempotent.

pub(super) const STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS teams (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL UNIQUE,
        abbreviation VARCHAR(3),
        color VARCHAR(7) NOT NULL DEFAULT '#00c853',
        logo TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE TABLE IF NOT EXISTS events (
        id SERIAL PRIMARY KEY,
        name VARCHAR(200) NOT NULL,
        type VARCHAR(20) NOT NULL CHECK (type IN ('league', 'knockout')),
        status VARCHAR(20) NOT NULL DEFAULT 'active',
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )",
    "ALTER TABLE events ADD COLUMN IF NOT EXISTS venue VARCHAR(200)",
    "ALTER TABLE events ADD COLUMN IF NOT EXISTS start_time TIMESTAMP",
    "CREATE TABLE IF NOT EXISTS matches (
        id SERIAL PRIMARY KEY,
        event_id INTEGER NOT NULL REFERENCES events(id) ON DELETE CASCADE,
        team1_id INTEGER REFERENCES teams(id),
        team2_id INTEGER REFERENCES teams(id),
        team1_score INTEGER,
        team2_score INTEGER,
        match_date TIMESTAMP,
        round INTEGER NOT NULL DEFAULT 1 CHECK (round >= 1),
        status VARCHAR(20) NOT NULL DEFAULT 'scheduled' CHECK (status IN ('scheduled', 'completed'))
    )",
    "ALTER TABLE matches ADD COLUMN IF NOT EXISTS venue VARCHAR(200)",
    "CREATE TABLE IF NOT EXISTS standings (
        id SERIAL PRIMARY KEY,
        event_id INTEGER NOT NULL REFERENCES events(id) ON DELETE CASCADE,
        team_id INTEGER NOT NULL REFERENCES teams(id),
        played INTEGER NOT NULL DEFAULT 0,
        won INTEGER NOT NULL DEFAULT 0,
        drawn INTEGER NOT NULL DEFAULT 0,
        lost INTEGER NOT NULL DEFAULT 0,
        goals_for INTEGER NOT NULL DEFAULT 0,
        goals_against INTEGER NOT NULL DEFAULT 0,
        points INTEGER NOT NULL DEFAULT 0,
        UNIQUE (event_id, team_id)
    )",
    "CREATE TABLE IF NOT EXISTS scorers (
        id SERIAL PRIMARY KEY,
        player VARCHAR(100) NOT NULL,
        team_id INTEGER REFERENCES teams(id),
        goals INTEGER NOT NULL DEFAULT 0,
        assists INTEGER NOT NULL DEFAULT 0,
        matches INTEGER NOT NULL DEFAULT 0,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE TABLE IF NOT EXISTS sponsors (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        description TEXT,
        contact VARCHAR(100),
        logo TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )",
];
