//! Init-time template bodies: environment file, server entry point, auth
//! middleware, database configuration, and package metadata.
//!
//! These are written once by `backforge init`. The scaffold command only
//! references them from generated code.

/// `.env` for a MySQL-backed project.
pub const ENV_MYSQL: &str = r"PORT=3000

DB_HOST=localhost
DB_USER=root
DB_PASS=
DB_NAME={{project_name}}
DB_DIALECT=mysql

JWT_SECRET=change_me
";

/// `.env` for a PostgreSQL-backed project.
pub const ENV_POSTGRES: &str = r"PORT=3000

DB_HOST=localhost
DB_USER=postgres
DB_PASS=
DB_NAME={{project_name}}
DB_DIALECT=postgres

JWT_SECRET=change_me
";

/// `.env` for a SQLite-backed project.
pub const ENV_SQLITE: &str = r"PORT=3000

DB_DIALECT=sqlite
DB_STORAGE=./database.sqlite

JWT_SECRET=change_me
";

/// `.env` for a MongoDB-backed project.
pub const ENV_MONGODB: &str = r"PORT=3000

MONGODB_URI=mongodb://localhost:27017/{{project_name}}

JWT_SECRET=change_me
";

/// Express server entry point.
pub const SERVER_INDEX_JS: &str = r"require('dotenv').config();

const express = require('express');
const bodyParser = require('body-parser');
const http = require('http');
const app = express();
const port = process.env.PORT || 3000;

// Middleware
app.use(bodyParser.json());
app.use(bodyParser.urlencoded({ extended: true }));
app.use(express.json());

// CORS settings
app.use((req, res, next) => {
  res.header('Access-Control-Allow-Origin', '*');
  res.header('Access-Control-Allow-Headers', 'Origin, X-Requested-With, Content-Type, Accept, Authorization');
  res.header('Access-Control-Allow-Methods', 'GET, POST, PUT, DELETE, OPTIONS');
  next();
});

// API Routes
const apiRouter = express.Router();
app.use('/api/v1', apiRouter);

// Mount scaffolded routes here, e.g.:
// apiRouter.use('/users', require('./routes/userRoutes'));

// Health check
app.get('/', (req, res) => {
  res.send('ok');
});

// Error handling middleware
app.use((err, req, res, next) => {
  console.error(err.stack);
  res.status(500).json({ message: 'Something went wrong!' });
});

// Start HTTP server
http.createServer(app).listen(port, () => {
  console.log(`HTTP server running on port ${port}`);
});
";

/// Bearer-token authentication middleware. Written once at init; scaffolded
/// routes only reference it.
pub const AUTH_MIDDLEWARE: &str = r"const jwt = require('jsonwebtoken');

const authenticateJWT = (req, res, next) => {
  const authHeader = req.header('Authorization');
  const token = authHeader?.startsWith('Bearer ') ? authHeader.substring(7) : null;

  if (!token) {
    return res.status(401).json({ message: 'Access denied. No token provided.' });
  }

  try {
    const decoded = jwt.verify(token, process.env.JWT_SECRET);
    req.user = decoded;
    next();
  } catch (error) {
    res.status(403).json({ message: 'Invalid token' });
  }
};

module.exports = authenticateJWT;
";

/// Database connection module for the document path.
pub const DATABASE_CONFIG_DOCUMENT: &str = r"const mongoose = require('mongoose');
require('dotenv').config();

mongoose.connect(process.env.MONGODB_URI);

mongoose.connection.on('error', (error) => {
  console.error('MongoDB connection error:', error.message);
});

module.exports = mongoose;
";

/// Environment-driven connection settings for the relational path.
pub const DATABASE_CONFIG_RELATIONAL: &str = r"require('dotenv').config();

module.exports = {
  development: {
    username: process.env.DB_USER,
    password: process.env.DB_PASS || null,
    database: process.env.DB_NAME,
    host: process.env.DB_HOST || '127.0.0.1',
    dialect: process.env.DB_DIALECT,
    storage: process.env.DB_STORAGE
  },
  test: {
    username: process.env.DB_USER,
    password: process.env.DB_PASS || null,
    database: process.env.DB_NAME_TEST,
    host: process.env.DB_HOST || '127.0.0.1',
    dialect: process.env.DB_DIALECT,
    storage: process.env.DB_STORAGE
  },
  production: {
    username: process.env.DB_USER,
    password: process.env.DB_PASS || null,
    database: process.env.DB_NAME_PROD,
    host: process.env.DB_HOST || '127.0.0.1',
    dialect: process.env.DB_DIALECT,
    storage: process.env.DB_STORAGE
  }
};
";

/// Package metadata for the generated project. Dependencies are listed, not
/// installed.
pub const PACKAGE_JSON: &str = r#"{
  "name": "{{project_name}}",
  "version": "1.0.0",
  "private": true,
  "main": "index.js",
  "scripts": {
    "start": "node index.js",
    "dev": "nodemon index.js"{{#if is_relational}},
    "migrate": "sequelize-cli db:migrate",
    "migrate:undo": "sequelize-cli db:migrate:undo"{{/if}}
  },
  "dependencies": {
    "express": "^4.19.2",
    "body-parser": "^1.20.2",
    "dotenv": "^16.4.5",
    "jsonwebtoken": "^9.0.2",
    "bcryptjs": "^2.4.3"{{#if is_mongodb}},
    "mongoose": "^8.4.0"{{/if}}{{#if is_relational}},
    "sequelize": "^6.37.3"{{/if}}{{#if is_mysql}},
    "mysql2": "^3.9.7"{{/if}}{{#if is_postgres}},
    "pg": "^8.11.5",
    "pg-hstore": "^2.3.4"{{/if}}{{#if is_sqlite}},
    "sqlite3": "^5.1.7"{{/if}}
  },
  "devDependencies": {
    "nodemon": "^3.1.0"{{#if is_relational}},
    "sequelize-cli": "^6.6.2"{{/if}}
  }
}
"#;
