//! Route template bodies.

/// Routes for an auth entity: register and login are public, the profile
/// pair sits behind the authentication middleware.
pub const ROUTES_AUTH: &str = r"const express = require('express');
const router = express.Router();
const {{entity_camel}}Controller = require('../controllers/{{entity_camel}}Controller');
const authenticateJWT = require('../middleware/auth');

// Public routes
router.post('/register', {{entity_camel}}Controller.create);
router.post('/login', {{entity_camel}}Controller.login);

// Protected routes
router.get('/profile', authenticateJWT, {{entity_camel}}Controller.getProfile);
router.put('/profile', authenticateJWT, {{entity_camel}}Controller.updateProfile);

module.exports = router;
";

/// REST routes for a CRUD entity, optionally gated by the authentication
/// middleware.
pub const ROUTES_CRUD: &str = r"const express = require('express');
const router = express.Router();
const {{entity_camel}}Controller = require('../controllers/{{entity_camel}}Controller');
{{#if auth}}
const authenticateJWT = require('../middleware/auth');
{{/if}}

router.post('/', {{#if auth}}authenticateJWT, {{/if}}{{entity_camel}}Controller.create);
router.get('/', {{#if auth}}authenticateJWT, {{/if}}{{entity_camel}}Controller.getAll);
router.get('/:id', {{#if auth}}authenticateJWT, {{/if}}{{entity_camel}}Controller.getById);
router.put('/:id', {{#if auth}}authenticateJWT, {{/if}}{{entity_camel}}Controller.update);
router.delete('/:id', {{#if auth}}authenticateJWT, {{/if}}{{entity_camel}}Controller.delete);

module.exports = router;
";
